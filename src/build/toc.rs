//! Pure construction of the generated documents. Nothing in this module
//! touches the filesystem; [`CourseBuilder`](super::CourseBuilder) feeds the
//! loaded info files in and hands the results to an
//! [`Emitter`](super::emit::Emitter).

use crate::config::{NavigationConfig, TextConfig};
use crate::model::course::{CourseInfo, LessonInfo, SectionInfo};
use crate::model::toc::{IndexLink, IndexPage, Logo, Navigation, TocDocument, TocItem};

/// File name of the generated landing page document.
pub const INDEX_FILE: &str = "index.yaml";
/// File name of the generated course-level TOC document.
pub const COURSE_TOC_FILE: &str = "toc.yaml";
/// File name of the generated per-section TOC documents.
pub const SECTION_TOC_FILE: &str = "section-toc.yaml";
/// File name of the generated per-lesson TOC documents.
pub const LESSON_TOC_FILE: &str = "lesson-toc.yaml";
/// File name of the generated course introduction placeholder.
pub const COURSE_INTRO_FILE: &str = "course-intro.md";
/// File name of the generated per-section introduction placeholders.
pub const SECTION_INTRO_FILE: &str = "section-intro.md";
/// File name every task entry links to inside its task directory.
pub const TASK_FILE: &str = "task.md";

/// Builds the landing page document: one tile per declared section, in
/// declared order, each pointing at that section's introduction page.
pub fn index_page(course: &CourseInfo, text: &TextConfig) -> IndexPage {
    let description = course
        .summary
        .clone()
        .unwrap_or_else(|| text.course_description.clone());
    let links = course
        .content
        .iter()
        .map(|section| IndexLink {
            title: section.clone(),
            description: text.section_description.clone(),
            href: format!("{}/{}", section, SECTION_INTRO_FILE),
        })
        .collect();

    IndexPage {
        title: course.title.clone(),
        description,
        links,
    }
}

/// Builds the course-level TOC: the static introduction entry followed by an
/// include of every section's own TOC, in declared order. The second item,
/// the first real section, is always marked expanded.
pub fn course_toc(
    course: &CourseInfo,
    navigation: &NavigationConfig,
    text: &TextConfig,
) -> TocDocument {
    let mut items = vec![TocItem::link(
        text.course_intro_label.clone(),
        COURSE_INTRO_FILE,
    )];

    for section in &course.content {
        items.push(TocItem::include(
            section.clone(),
            format!("{}/{}", section, SECTION_TOC_FILE),
        ));
    }

    mark_expanded(&mut items, 1);

    TocDocument {
        title: course.title.clone(),
        href: Some(String::from(INDEX_FILE)),
        navigation: Some(Navigation {
            logo: Logo {
                url: navigation.logo_url.clone(),
                text: navigation.logo_text.clone(),
            },
        }),
        items,
    }
}

/// Builds a section's TOC: the static module introduction entry followed by
/// an include of every lesson's own TOC, in declared order.
pub fn section_toc(name: &str, section: &SectionInfo, text: &TextConfig) -> TocDocument {
    let mut items = vec![TocItem::link(
        text.section_intro_label.clone(),
        SECTION_INTRO_FILE,
    )];

    for lesson in &section.content {
        items.push(TocItem::include(
            lesson.clone(),
            format!("{}/{}", lesson, LESSON_TOC_FILE),
        ));
    }

    TocDocument {
        title: String::from(name),
        href: None,
        navigation: None,
        items,
    }
}

/// Builds a lesson's TOC: one direct link per task, in declared order. Tasks
/// are leaf content, so their entries are plain links rather than includes.
pub fn lesson_toc(name: &str, lesson: &LessonInfo) -> TocDocument {
    let items = lesson
        .content
        .iter()
        .map(|task| TocItem::link(task.clone(), format!("{}/{}", task, TASK_FILE)))
        .collect();

    TocDocument {
        title: String::from(name),
        href: None,
        navigation: None,
        items,
    }
}

/// Marks the item at `index` as initially expanded in the rendered
/// navigation. Out-of-range indexes and plain link entries are left
/// untouched.
pub fn mark_expanded(items: &mut [TocItem], index: usize) {
    if let Some(include) = items.get_mut(index).and_then(TocItem::maybe_include_mut) {
        include.expanded = Some(true);
    }
}

/// Renders an introduction placeholder: the heading line is `#` immediately
/// followed by the heading text, then a single body line.
pub fn placeholder(heading: &str, body: &str) -> String {
    format!("#{}\n{}\n", heading, body)
}
