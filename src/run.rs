use crate::emit;
use crate::error::{Error, Result};
use crate::grammar;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write `text` to `out_dir/file_name` through a temporary file in
/// the same directory followed by an atomic rename, so a failed or
/// interrupted write never leaves a partial file behind.
fn write_atomic(out_dir: &Path, file_name: &str, text: &str) -> Result<()> {
    let path = out_dir.join(file_name);
    let mut tmp = NamedTempFile::new_in(out_dir).map_err(|e| Error::write(&path, e))?;
    tmp.write_all(text.as_bytes())
        .map_err(|e| Error::write(&path, e))?;
    tmp.persist(&path).map_err(|e| Error::write(&path, e.error))?;
    Ok(())
}

/// Generate every base family into `out_dir`, one file per family.
///
/// Each module's full text is assembled in memory before the
/// filesystem is touched.
pub fn generate(out_dir: impl AsRef<Path>) -> Result<()> {
    let out_dir = out_dir.as_ref();
    for family in grammar::families()? {
        let text = emit::family(&family);
        write_atomic(out_dir, &family.file_name(), &text)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;

    #[test]
    fn generates_one_file_per_family() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        generate(dir.path())?;
        let expr = fs::read_to_string(dir.path().join("expr.rs")).unwrap();
        let stmt = fs::read_to_string(dir.path().join("stmt.rs")).unwrap();
        assert!(expr.contains("pub enum Expr {"));
        assert!(expr.contains("fn visit_binary_expr(&mut self, expr: &ExprBinary) -> R;"));
        assert!(stmt.contains("pub enum Stmt {"));
        assert!(stmt.contains("visitor.visit_block_stmt(self)"));
        Ok(())
    }

    #[test]
    fn repeated_runs_are_byte_identical() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        generate(dir.path())?;
        let first = fs::read(dir.path().join("expr.rs")).unwrap();
        generate(dir.path())?;
        let second = fs::read(dir.path().join("expr.rs")).unwrap();
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn no_temp_files_left_behind() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        generate(dir.path())?;
        let mut names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        assert_eq!(names, vec!["expr.rs", "stmt.rs"]);
        Ok(())
    }

    #[test]
    fn missing_output_directory_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nonexistent");
        let err = generate(&missing).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }
}
