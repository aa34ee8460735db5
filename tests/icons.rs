use bat_launcher::data::{self, DataPaths};
use tempfile::tempdir;

#[test]
fn copy_icon_names_file_after_entry() {
    let dir = tempdir().unwrap();
    let paths = DataPaths::new(dir.path().join("app"));
    let src = dir.path().join("picture.png");
    std::fs::write(&src, b"png-bytes").unwrap();

    let dest = data::copy_icon(&paths, &src, "entry-1").unwrap();
    assert_eq!(dest, paths.icons_dir.join("entry-1.png"));
    assert_eq!(std::fs::read(&dest).unwrap(), b"png-bytes");
    assert!(src.exists());
}

#[test]
fn copy_icon_overwrites_existing_copy() {
    let dir = tempdir().unwrap();
    let paths = DataPaths::new(dir.path());
    let first = dir.path().join("a.ico");
    let second = dir.path().join("b.ico");
    std::fs::write(&first, b"one").unwrap();
    std::fs::write(&second, b"two").unwrap();

    data::copy_icon(&paths, &first, "same").unwrap();
    let dest = data::copy_icon(&paths, &second, "same").unwrap();
    assert_eq!(std::fs::read(dest).unwrap(), b"two");
}

#[test]
fn copy_icon_missing_source_returns_none() {
    let dir = tempdir().unwrap();
    let paths = DataPaths::new(dir.path());
    assert!(data::copy_icon(&paths, &dir.path().join("nope.png"), "x").is_none());
}

#[test]
fn icons_dir_is_created_on_demand() {
    let dir = tempdir().unwrap();
    let paths = DataPaths::new(dir.path().join("fresh"));
    assert!(!paths.icons_dir.exists());
    let created = data::icons_dir(&paths).unwrap();
    assert!(created.is_dir());
}

#[test]
fn delete_icon_removes_file_and_ignores_missing() {
    let dir = tempdir().unwrap();
    let icon = dir.path().join("icon.bmp");
    std::fs::write(&icon, b"x").unwrap();
    let icon_str = icon.to_string_lossy().into_owned();

    data::delete_icon(Some(&icon_str));
    assert!(!icon.exists());

    data::delete_icon(Some(&icon_str));
    data::delete_icon(Some(""));
    data::delete_icon(None);
}
