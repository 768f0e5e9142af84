use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::model::course::{CourseInfo, LessonInfo, SectionInfo};

use self::emit::{Emitter, FsEmitter};

pub mod emit;
pub mod toc;

/// File name of the optional generator configuration at the course root.
const CONFIG_FILE: &str = "course.toml";

/// Walks a course tree and emits every navigation document and placeholder
/// page the site generator expects.
pub struct CourseBuilder {
    /// The root directory of the course.
    root: PathBuf,
    /// Generator configuration for the course.
    config: Config,
    /// The course description loaded from the root info file.
    course: CourseInfo,
    /// Destination the generated documents are written through.
    emitter: Box<dyn Emitter>,
}

impl CourseBuilder {
    /// Load the course rooted at `root`, reading `course.toml` when present.
    pub fn load(root: impl Into<PathBuf>) -> Result<CourseBuilder> {
        let root = root.into();
        let config_location = root.join(CONFIG_FILE);

        let config = if config_location.exists() {
            Config::load(config_location)?
        } else {
            Config::default()
        };

        CourseBuilder::load_with_config(root, config)
    }

    /// Load the course rooted at `root` with an already built configuration.
    pub fn load_with_config(root: impl Into<PathBuf>, config: Config) -> Result<CourseBuilder> {
        let root = root.into();
        let course = CourseInfo::load(&root)?;

        let builder = CourseBuilder {
            root,
            config,
            course,
            emitter: Box::new(FsEmitter),
        };

        Ok(builder)
    }

    /// Replace the emitter generated documents are written through.
    pub fn with_emitter(&mut self, emitter: impl Emitter + 'static) {
        self.emitter = Box::new(emitter);
    }

    /// Generate every output document for the course, overwriting the
    /// results of previous runs. Documents are written in tree order; the
    /// first missing or malformed info file aborts the run, leaving files
    /// written so far in place.
    pub fn build(self) -> Result<()> {
        let CourseBuilder {
            root,
            config,
            course,
            mut emitter,
        } = self;

        info!(
            "Generating navigation for '{}' ({} sections)",
            course.title,
            course.content.len()
        );

        let index = toc::index_page(&course, &config.text);
        emitter.emit_index(&root.join(toc::INDEX_FILE), &index)?;

        let course_toc = toc::course_toc(&course, &config.navigation, &config.text);
        emitter.emit_toc(&root.join(toc::COURSE_TOC_FILE), &course_toc)?;

        let course_intro = toc::placeholder(
            &config.text.course_intro_label,
            &config.text.course_intro_body,
        );
        emitter.emit_text(&root.join(toc::COURSE_INTRO_FILE), &course_intro)?;

        for section_name in &course.content {
            debug!("Generating section {}", section_name);

            let section_dir = root.join(section_name);
            let section_intro = toc::placeholder(
                &config.text.section_intro_label,
                &config.text.section_intro_body,
            );
            emitter.emit_text(&section_dir.join(toc::SECTION_INTRO_FILE), &section_intro)?;

            let section = SectionInfo::load(&section_dir)?;
            let section_toc = toc::section_toc(section_name, &section, &config.text);
            emitter.emit_toc(&section_dir.join(toc::SECTION_TOC_FILE), &section_toc)?;

            for lesson_name in &section.content {
                debug!("Generating lesson {}/{}", section_name, lesson_name);

                let lesson_dir = section_dir.join(lesson_name);
                let lesson = LessonInfo::load(&lesson_dir)?;
                let lesson_toc = toc::lesson_toc(lesson_name, &lesson);
                emitter.emit_toc(&lesson_dir.join(toc::LESSON_TOC_FILE), &lesson_toc)?;
            }
        }

        Ok(())
    }
}
