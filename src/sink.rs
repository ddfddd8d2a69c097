use std::{fs, io, path::Path, path::PathBuf};

pub fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
    arboard::Clipboard::new()?.set_text(text.to_string())
}

/// Writes `text` to a timestamped file inside `dir`, creating the directory
/// if needed, and returns the path it wrote to.
pub fn save_to_dir(dir: &Path, text: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("json_{timestamp}.json"));
    fs::write(&path, text)?;

    Ok(path)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn save_to_dir_test() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out");

        let path = save_to_dir(&target, "{}").unwrap();

        assert_eq!(path.parent(), Some(target.as_path()));
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("json_"));
        assert!(name.ends_with(".json"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }
}
