/*!
 * Tests for treeclip functionality
 */

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indicatif::ProgressBar;
use tempfile::tempdir;

use crate::config::{Config, OutputMode};
use crate::filter::{is_binary_extension, is_excluded, PathFilter};
use crate::serializer::ContentSerializer;
use crate::tree::TreeRenderer;

// Helper function to create a test directory structure:
//
//   root/
//     a.txt            "hello"
//     b/
//       y.txt          "why"
//       z.txt          "zed"
//     node_modules/
//       x.txt          "secret"
//     image.png        fake binary payload
fn setup_test_directory() -> io::Result<(tempfile::TempDir, PathBuf)> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path().join("root");

    fs::create_dir(&root)?;
    fs::create_dir(root.join("b"))?;
    fs::create_dir(root.join("node_modules"))?;

    let mut a = File::create(root.join("a.txt"))?;
    write!(a, "hello")?;

    let mut y = File::create(root.join("b").join("y.txt"))?;
    write!(y, "why")?;

    let mut z = File::create(root.join("b").join("z.txt"))?;
    write!(z, "zed")?;

    let mut x = File::create(root.join("node_modules").join("x.txt"))?;
    write!(x, "secret")?;

    let mut png = File::create(root.join("image.png"))?;
    png.write_all(b"fakepngdata")?;

    Ok((temp_dir, root))
}

fn test_serializer() -> ContentSerializer {
    ContentSerializer::new(PathFilter::default(), Arc::new(ProgressBar::hidden()))
}

fn test_renderer() -> TreeRenderer {
    TreeRenderer::new(PathFilter::default())
}

// Exclusion requires a full path segment, never a substring of one
#[test]
fn test_exclusion_segment_matching() {
    assert!(is_excluded(Path::new("/home/user/project/node_modules")));
    assert!(is_excluded(Path::new("/home/user/project/node_modules/x.txt")));
    assert!(is_excluded(Path::new("src/build/output.o")));
    assert!(is_excluded(Path::new("node_modules")));
    assert!(is_excluded(Path::new(r"C:\proj\node_modules\left-pad")));
    assert!(is_excluded(Path::new("/srv/app/.git")));
    assert!(is_excluded(Path::new("/srv/app/Thumbs.db")));

    // Substring of a longer segment must not trigger
    assert!(!is_excluded(Path::new("/home/user/build-tools/main.rs")));
    assert!(!is_excluded(Path::new("/home/user/rebuild")));
    assert!(!is_excluded(Path::new("/home/user/my_node_modules_notes.md")));
    assert!(!is_excluded(Path::new("src/main.rs")));
}

#[test]
fn test_binary_extension_classification() {
    assert!(is_binary_extension(Path::new("photo.png")));
    assert!(is_binary_extension(Path::new("photo.PNG")));
    assert!(is_binary_extension(Path::new("lib/native.DyLib")));
    assert!(is_binary_extension(Path::new("report.docx")));

    assert!(!is_binary_extension(Path::new("notes.txt")));
    assert!(!is_binary_extension(Path::new("main.rs")));
    assert!(!is_binary_extension(Path::new("README")));
}

// Both lists are overridable through the filter constructor
#[test]
fn test_custom_filter_sets() {
    let custom = PathFilter::with_names(vec!["secrets".to_string()]);
    assert!(custom.is_excluded(Path::new("/srv/app/secrets/key.pem")));
    assert!(!custom.is_excluded(Path::new("/srv/app/node_modules/x.js")));

    let with_globs = PathFilter::new(vec!["*.log".to_string()]);
    assert!(with_globs.is_excluded(Path::new("/srv/app/server.log")));
    assert!(with_globs.is_excluded(Path::new("/srv/app/node_modules")));
}

// Directories sort before files, each group alphabetically
#[test]
fn test_tree_ordering() -> crate::error::Result<()> {
    let (_temp_dir, root) = setup_test_directory()?;

    let output = test_renderer().render(&[root])?;
    let expected = "\
# Directory Structure:
├── root/
│   ├── b/
│   │   ├── y.txt
│   │   ├── z.txt
│   ├── a.txt
│   ├── image.png";

    assert_eq!(output, expected);
    Ok(())
}

// One line for the title plus one per visited entry
#[test]
fn test_tree_line_count() -> crate::error::Result<()> {
    let (_temp_dir, root) = setup_test_directory()?;

    let output = test_renderer().render(&[root])?;
    // root/, b/, y.txt, z.txt, a.txt, image.png -- node_modules is excluded
    assert_eq!(output.lines().count(), 1 + 6);
    assert!(!output.contains("node_modules"));
    Ok(())
}

#[test]
fn test_tree_file_root() -> crate::error::Result<()> {
    let (_temp_dir, root) = setup_test_directory()?;

    let output = test_renderer().render(&[root.join("a.txt")])?;
    assert_eq!(output, "# Directory Structure:\n├── a.txt");
    Ok(())
}

#[test]
fn test_serialize_round_trip() -> crate::error::Result<()> {
    let (_temp_dir, root) = setup_test_directory()?;

    let output = test_serializer().serialize(&[root.clone()])?;

    let a_path = root.join("a.txt");
    assert!(output.contains(&format!("# FILE: {}\n\nhello", a_path.display())));
    assert!(output.contains("# DIRECTORY: root"));

    // The excluded subdirectory leaves no trace
    assert!(!output.contains("x.txt"));
    assert!(!output.contains("secret"));
    Ok(())
}

#[test]
fn test_serialize_binary_placeholder() -> crate::error::Result<()> {
    let (_temp_dir, root) = setup_test_directory()?;

    let output = test_serializer().serialize(&[root.clone()])?;

    let png_path = root.join("image.png");
    assert!(output.contains(&format!(
        "# FILE: {}\n[Binary file content not copied]",
        png_path.display()
    )));
    assert!(!output.contains("fakepngdata"));
    Ok(())
}

// 80-equals banners separate roots; 40-dash separators stay inside them
#[test]
fn test_serialize_separators() -> crate::error::Result<()> {
    let (_temp_dir, root) = setup_test_directory()?;

    let single = test_serializer().serialize(&[root.clone()])?;
    assert!(single.contains(&"-".repeat(40)));
    assert!(!single.contains(&"=".repeat(80)));

    let double = test_serializer().serialize(&[root.clone(), root.join("a.txt")])?;
    assert_eq!(double.matches(&"=".repeat(80)).count(), 1);
    assert!(double.ends_with("hello"));
    Ok(())
}

// A nested directory block nests inline within the parent's child list
#[test]
fn test_serialize_nested_directory() -> crate::error::Result<()> {
    let (_temp_dir, root) = setup_test_directory()?;

    let output = test_serializer().serialize(&[root])?;
    let nested = Path::new("root").join("b");
    assert!(output.contains(&format!("# DIRECTORY: {}", nested.display())));
    assert!(output.contains("why"));
    assert!(output.contains("zed"));
    Ok(())
}

#[test]
fn test_serialize_statistics() -> crate::error::Result<()> {
    let (_temp_dir, root) = setup_test_directory()?;

    let serializer = test_serializer();
    serializer.serialize(&[root])?;

    let stats = serializer.get_statistics();
    // a.txt, y.txt, z.txt and the binary image.png; nothing under node_modules
    assert_eq!(stats.files_processed, 4);
    assert_eq!(stats.total_chars, "hello".len() + "why".len() + "zed".len());
    assert_eq!(stats.total_lines, 3);
    Ok(())
}

// A missing root aborts the whole call with no partial output
#[test]
fn test_missing_root_aborts() {
    let missing = PathBuf::from("/definitely/not/a/real/path");
    assert!(test_renderer().render(&[missing.clone()]).is_err());
    assert!(test_serializer().serialize(&[missing]).is_err());
}

#[test]
fn test_config_validation() {
    let config = Config {
        roots: vec![PathBuf::from("/definitely/not/a/real/path")],
        mode: OutputMode::Combined,
        ignore_patterns: vec![],
        clip: false,
    };
    assert!(config.validate().is_err());

    let empty = Config {
        roots: vec![],
        mode: OutputMode::Combined,
        ignore_patterns: vec![],
        clip: false,
    };
    assert!(empty.validate().is_err());
}

// An unreadable subdirectory yields an inline diagnostic; siblings survive
#[cfg(unix)]
#[test]
fn test_unreadable_directory_is_inline() -> crate::error::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let (_temp_dir, root) = setup_test_directory()?;
    let locked = root.join("b");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

    // Permission bits don't bind when running as root; nothing to observe then
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
        return Ok(());
    }

    let tree = test_renderer().render(&[root.clone()])?;
    assert!(tree.contains("[Error reading directory:"));
    assert!(tree.contains("a.txt"));
    assert!(tree.contains("image.png"));

    let contents = test_serializer().serialize(&[root.clone()])?;
    assert!(contents.contains("[Error reading directory:"));
    assert!(contents.contains("hello"));

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
    Ok(())
}

// An unreadable file keeps its header; the content becomes a bracketed message
#[cfg(unix)]
#[test]
fn test_unreadable_file_is_inline() -> crate::error::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let (_temp_dir, root) = setup_test_directory()?;
    let locked = root.join("a.txt");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

    if fs::read_to_string(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o644))?;
        return Ok(());
    }

    let output = test_serializer().serialize(&[root.clone()])?;
    assert!(output.contains(&format!(
        "# FILE: {}\n\n[Error reading file:",
        locked.display()
    )));
    // Later files are unaffected
    assert!(output.contains("why"));

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644))?;
    Ok(())
}
