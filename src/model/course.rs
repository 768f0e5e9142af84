use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::error::{Error, Result};

/// File name of the course-level info file, expected at the course root.
const COURSE_INFO: &str = "course-info.yaml";
/// File name of the per-section info file, expected in the section directory.
const SECTION_INFO: &str = "section-info.yaml";
/// File name of the per-lesson info file, expected in the lesson directory.
const LESSON_INFO: &str = "lesson-info.yaml";

/// The course description authored in `course-info.yaml`, the root of the
/// content tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseInfo {
    /// Display title of the course.
    pub title: String,
    /// Optional short description shown on the landing page.
    pub summary: Option<String>,
    /// Section directory names, in display order.
    pub content: Vec<String>,
}

impl CourseInfo {
    /// Load the course info file found in the course root directory.
    pub fn load(course_dir: impl AsRef<Path>) -> Result<Self> {
        read_info(course_dir.as_ref().join(COURSE_INFO))
    }
}

impl FromStr for CourseInfo {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        serde_yaml::from_str(source).with_context(|| "Attempted to parse invalid course info")
    }
}

/// A section's description authored in `section-info.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionInfo {
    /// Lesson directory names, in display order.
    pub content: Vec<String>,
}

impl SectionInfo {
    /// Load the section info file found in the given section directory.
    pub fn load(section_dir: impl AsRef<Path>) -> Result<Self> {
        read_info(section_dir.as_ref().join(SECTION_INFO))
    }
}

impl FromStr for SectionInfo {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        serde_yaml::from_str(source).with_context(|| "Attempted to parse invalid section info")
    }
}

/// A lesson's description authored in `lesson-info.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LessonInfo {
    /// Task directory names, in display order.
    pub content: Vec<String>,
}

impl LessonInfo {
    /// Load the lesson info file found in the given lesson directory.
    pub fn load(lesson_dir: impl AsRef<Path>) -> Result<Self> {
        read_info(lesson_dir.as_ref().join(LESSON_INFO))
    }
}

impl FromStr for LessonInfo {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        serde_yaml::from_str(source).with_context(|| "Attempted to parse invalid lesson info")
    }
}

fn read_info<T>(path: PathBuf) -> Result<T>
where
    T: FromStr<Err = Error>,
{
    let source = fs::read_to_string(&path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    source
        .parse()
        .with_context(|| format!("Failed to parse {}", path.display()))
}
