use course_toc::build::emit::Emitter;
use course_toc::error::Result;
use course_toc::model::toc::{IndexPage, TocDocument};
use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
    rc::Rc,
};

/// A document captured by a [`TestEmitter`] instead of being written out.
#[derive(Debug, Clone, PartialEq)]
pub enum Emitted {
    Toc(TocDocument),
    Index(IndexPage),
    Text(String),
}

/// Emitter that records every document handed to it. Clones share the
/// recording, so a test can keep one handle while the builder consumes the
/// other.
#[derive(Clone, Default)]
pub struct TestEmitter(Rc<RefCell<Vec<(PathBuf, Emitted)>>>);

impl TestEmitter {
    /// Every recorded document with its target path, in emit order.
    #[allow(dead_code)] // Avoid a false positive on the dead code analysis.
    pub fn emitted(&self) -> Vec<(PathBuf, Emitted)> {
        self.0.borrow().clone()
    }

    /// The first recorded TOC document whose path ends with `suffix`.
    #[allow(dead_code)] // Avoid a false positive on the dead code analysis.
    pub fn toc(&self, suffix: &str) -> Option<TocDocument> {
        self.0
            .borrow()
            .iter()
            .find_map(|(path, emitted)| match emitted {
                Emitted::Toc(toc) if path.ends_with(suffix) => Some(toc.clone()),
                _ => None,
            })
    }

    /// The recorded landing page document.
    #[allow(dead_code)] // Avoid a false positive on the dead code analysis.
    pub fn index(&self) -> Option<IndexPage> {
        self.0
            .borrow()
            .iter()
            .find_map(|(_, emitted)| match emitted {
                Emitted::Index(index) => Some(index.clone()),
                _ => None,
            })
    }

    /// The first recorded text document whose path ends with `suffix`.
    #[allow(dead_code)] // Avoid a false positive on the dead code analysis.
    pub fn text(&self, suffix: &str) -> Option<String> {
        self.0
            .borrow()
            .iter()
            .find_map(|(path, emitted)| match emitted {
                Emitted::Text(text) if path.ends_with(suffix) => Some(text.clone()),
                _ => None,
            })
    }
}

impl Emitter for TestEmitter {
    fn emit_toc(&mut self, path: &Path, toc: &TocDocument) -> Result<()> {
        self.0
            .borrow_mut()
            .push((path.to_path_buf(), Emitted::Toc(toc.clone())));

        Ok(())
    }

    fn emit_index(&mut self, path: &Path, index: &IndexPage) -> Result<()> {
        self.0
            .borrow_mut()
            .push((path.to_path_buf(), Emitted::Index(index.clone())));

        Ok(())
    }

    fn emit_text(&mut self, path: &Path, text: &str) -> Result<()> {
        self.0
            .borrow_mut()
            .push((path.to_path_buf(), Emitted::Text(String::from(text))));

        Ok(())
    }
}

/// Writes a small two-section course tree under `root`: `basics` holds one
/// lesson with two tasks, `advanced` declares no lessons.
#[allow(dead_code)] // Avoid a false positive on the dead code analysis.
pub fn scaffold_course(root: &Path) {
    write(
        root,
        "course-info.yaml",
        "title: Test Course\nsummary: A hands-on course.\ncontent:\n  - basics\n  - advanced\n",
    );
    write(root, "basics/section-info.yaml", "content:\n  - variables\n");
    write(
        root,
        "basics/variables/lesson-info.yaml",
        "content:\n  - declare\n  - mutate\n",
    );
    write(root, "advanced/section-info.yaml", "content: []\n");
}

/// Writes `contents` to `root`/`relative`, creating parent directories.
#[allow(dead_code)] // Avoid a false positive on the dead code analysis.
pub fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("failed to create test directories");
    }

    fs::write(path, contents).expect("failed to write test file");
}
