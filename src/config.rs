use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{fs::File, io::Read, path::Path, str::FromStr};

use crate::error::{Error, Result};

/// Generator configuration, loaded from an optional `course.toml` at the
/// course root. Every field defaults to the fixed block the generated sites
/// have always used, so most courses ship without a config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Site-header navigation placed on the course-level TOC.
    pub navigation: NavigationConfig,
    /// Fixed entry labels and fallback descriptions used across documents.
    pub text: TextConfig,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Config> {
        let mut buffer = String::new();
        File::open(path)
            .with_context(|| "Failed to open config file")?
            .read_to_string(&mut buffer)
            .with_context(|| "Failed to read config file")?;

        Config::from_str(&buffer)
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        toml::from_str(source).with_context(|| "Attempted to parse invalid configuration file")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct NavigationConfig {
    /// Target of the logo link in the site header.
    pub logo_url: String,
    /// Text displayed next to the logo.
    pub logo_text: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            logo_url: String::from("/"),
            logo_text: String::from("IDE EDU"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct TextConfig {
    /// Label of the static introduction entry in the course TOC; the course
    /// introduction placeholder reuses it as its heading.
    pub course_intro_label: String,
    /// Label of the static introduction entry in every section TOC; the
    /// section introduction placeholders reuse it as their heading.
    pub section_intro_label: String,
    /// Landing page description used when the course has no summary.
    pub course_description: String,
    /// Description shown under every section tile on the landing page.
    pub section_description: String,
    /// Body line of the course introduction placeholder.
    pub course_intro_body: String,
    /// Body line of the section introduction placeholders.
    pub section_intro_body: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            course_intro_label: String::from("Введение в курс"),
            section_intro_label: String::from("Введение в модуль"),
            course_description: String::from("Здесь должно быть описание курса"),
            section_description: String::from("Описание к модулю."),
            course_intro_body: String::from("Здесь должно быть введение курса."),
            section_intro_body: String::from("Здесь должно быть введение модуля."),
        }
    }
}
