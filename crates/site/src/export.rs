//! Static export: write every page of the site to a directory.
//!
//! Layout produced under the output directory:
//! - `index.html` (home)
//! - `<works|projects>/<id>/index.html` for each registry record
//! - `404.html`

use crate::{PageStatus, Site};
use folio_core::{FolioError, FolioResult, INDEX_HTML_FILENAME, NOT_FOUND_HTML_FILENAME};
use std::fs;
use std::path::{Path, PathBuf};

/// Files written by an export, in write order.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub files: Vec<PathBuf>,
}

impl Site {
    pub fn export(&self, out_dir: &Path) -> FolioResult<ExportReport> {
        fs::create_dir_all(out_dir).map_err(FolioError::OutputDirCreation)?;
        let mut report = ExportReport::default();

        let home = self.render_home()?;
        report
            .files
            .push(write_page(&out_dir.join(INDEX_HTML_FILENAME), &home)?);

        for record in self.registry().records() {
            let page = self.render_detail(record.kind, record.id.as_str())?;
            if page.status != PageStatus::Ok {
                return Err(FolioError::InvalidInput(format!(
                    "registry record {} did not resolve during export",
                    record.id
                )));
            }
            let dir = out_dir
                .join(record.kind.route_segment())
                .join(record.id.as_str());
            fs::create_dir_all(&dir).map_err(FolioError::OutputDirCreation)?;
            report
                .files
                .push(write_page(&dir.join(INDEX_HTML_FILENAME), &page.html)?);
        }

        let not_found = self.render_not_found("Page Not Found")?;
        report
            .files
            .push(write_page(&out_dir.join(NOT_FOUND_HTML_FILENAME), &not_found)?);

        tracing::info!(
            files = report.files.len(),
            out_dir = %out_dir.display(),
            "static export complete"
        );
        Ok(report)
    }
}

fn write_page(path: &Path, html: &str) -> FolioResult<PathBuf> {
    fs::write(path, html).map_err(FolioError::FileWrite)?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::SiteConfig;

    #[test]
    fn export_writes_every_page() {
        let out = tempfile::tempdir().expect("tempdir");
        let site = Site::builtin(SiteConfig::default()).unwrap();

        let report = site.export(out.path()).expect("export succeeds");

        assert_eq!(report.files.len(), 1 + site.registry().len() + 1);
        assert!(out.path().join("index.html").is_file());
        assert!(out.path().join("404.html").is_file());
        let detail = out.path().join("works/osep-statistician/index.html");
        let html = fs::read_to_string(detail).expect("detail page written");
        assert!(html.contains("ENQSP"));
        assert!(out.path().join("projects/cocoaguard/index.html").is_file());
    }

    #[test]
    fn export_into_a_file_path_fails() {
        let out = tempfile::tempdir().expect("tempdir");
        let blocker = out.path().join("taken");
        fs::write(&blocker, "x").unwrap();
        let site = Site::builtin(SiteConfig::default()).unwrap();

        let err = site.export(&blocker).expect_err("cannot export into a file");
        assert!(matches!(err, FolioError::OutputDirCreation(_)));
    }
}
