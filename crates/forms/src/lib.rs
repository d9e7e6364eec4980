//! zenity-forms - Ready-made developer forms on top of zenity-wrapper
//!
//! Each preset is a titled list of form fields with a stable key per field.
//! Running a preset returns the submitted values keyed by those names.

use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;
use zenity_wrapper::{CommonFields, FormField, FormsOptions, Zenity};

/// A reusable form definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preset {
    /// Stable identifier used on the command line
    pub id: &'static str,
    /// Name shown in the picker
    pub name: &'static str,
    pub category: &'static str,
    /// Dialog window title
    pub title: &'static str,
    /// Result key and field, in display order
    pub fields: Vec<(&'static str, FormField)>,
}

impl Preset {
    fn new(id: &'static str, name: &'static str, category: &'static str, title: &'static str) -> Self {
        Self {
            id,
            name,
            category,
            title,
            fields: Vec::new(),
        }
    }

    fn entry(mut self, key: &'static str, label: &str) -> Self {
        self.fields.push((key, FormField::entry(label)));
        self
    }

    fn password(mut self, key: &'static str, label: &str) -> Self {
        self.fields.push((key, FormField::password(label)));
        self
    }

    fn multiline(mut self, key: &'static str, label: &str) -> Self {
        self.fields.push((key, FormField::multiline(label)));
        self
    }

    fn calendar(mut self, key: &'static str, label: &str) -> Self {
        self.fields.push((key, FormField::calendar(label)));
        self
    }

    fn combo(mut self, key: &'static str, label: &str, values: &[&str]) -> Self {
        self.fields
            .push((key, FormField::combo(label, values.iter().copied())));
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(key, _)| *key)
    }

    pub fn form_fields(&self) -> Vec<FormField> {
        self.fields.iter().map(|(_, field)| field.clone()).collect()
    }
}

/// All built-in presets, grouped by category
pub fn presets() -> Vec<Preset> {
    const BOOL: &[&str] = &["true", "false"];
    const YES_NO: &[&str] = &["Yes", "No"];

    vec![
        // Setup
        Preset::new("package-init", "Package Init", "Setup", "Package Initialization")
            .entry("packageName", "Package Name")
            .entry("version", "Version")
            .entry("description", "Description")
            .entry("author", "Author")
            .combo(
                "license",
                "License",
                &["MIT", "Apache-2.0", "GPL-3.0", "BSD-3-Clause", "ISC", "Unlicense"],
            )
            .combo("runtime", "Runtime", &["Bun", "Node", "Deno"]),
        Preset::new("typescript-config", "TypeScript Config", "Setup", "TypeScript Config")
            .combo("target", "Target", &["ES2022", "ES2021", "ES2020", "ESNext"])
            .combo("module", "Module", &["ESNext", "CommonJS", "ES2022", "NodeNext"])
            .combo("strict", "Strict Mode", BOOL)
            .entry("outDir", "Out Directory")
            .entry("rootDir", "Root Directory"),
        Preset::new("python-project", "Python Project", "Setup", "Python Project Setup")
            .entry("projectName", "Project Name")
            .combo("pythonVersion", "Python Version", &["3.12", "3.11", "3.10", "3.9"])
            .combo("packageManager", "Package Manager", &["pip", "poetry", "uv"])
            .combo("framework", "Framework", &["FastAPI", "Flask", "Django", "None"])
            .combo("useVenv", "Use Virtual Env", YES_NO),
        Preset::new("web-project", "Web Project", "Setup", "Web Project Setup")
            .entry("projectName", "Project Name")
            .combo(
                "framework",
                "Framework",
                &["React", "Vue", "Svelte", "Solid", "Vanilla"],
            )
            .combo("typescript", "TypeScript", YES_NO)
            .combo(
                "styling",
                "Styling",
                &["Tailwind", "UnoCSS", "CSS Modules", "Sass", "None"],
            )
            .combo("linter", "Linter", &["ESLint + Prettier", "Biome", "None"]),
        // Git
        Preset::new("git-commit", "Git Commit", "Git", "Git Commit")
            .combo(
                "type",
                "Type",
                &["feat", "fix", "docs", "style", "refactor", "test", "chore", "perf"],
            )
            .entry("scope", "Scope (optional)")
            .entry("summary", "Summary")
            .multiline("description", "Description (optional)")
            .combo("breaking", "Breaking Change", &["No", "Yes"]),
        Preset::new("pull-request", "Pull Request", "Git", "Pull Request")
            .entry("title", "Title")
            .combo(
                "type",
                "Type",
                &["Feature", "Bugfix", "Hotfix", "Refactor", "Docs", "Chore"],
            )
            .multiline("description", "Description")
            .entry("closes", "Closes Issue #")
            .entry("reviewers", "Reviewers (comma separated)"),
        Preset::new("release-version", "Release Version", "Git", "Release Version")
            .entry("currentVersion", "Current Version")
            .combo("type", "Release Type", &["patch", "minor", "major", "custom"])
            .entry("newVersion", "New Version (if custom)")
            .multiline("changelog", "Changelog Summary"),
        Preset::new("gitignore", ".gitignore", "Git", ".gitignore Generator")
            .combo(
                "language",
                "Language",
                &["Node", "Python", "Go", "Rust", "Java", "Generic"],
            )
            .combo(
                "framework",
                "Framework",
                &["None", "Next.js", "Vite", "Django", "Flask"],
            )
            .combo("editor", "Editor", &["VSCode", "JetBrains", "Vim", "None"])
            .combo("os", "OS", &["macOS", "Linux", "Windows", "All"])
            .entry("extras", "Extra Patterns (comma separated)"),
        // Config
        Preset::new("env-config", "Environment Config", "Config", "Environment Config")
            .combo(
                "environment",
                "Environment",
                &["Development", "Staging", "Production", "Test"],
            )
            .multiline("variables", "Variables (KEY=VALUE per line)"),
        Preset::new("lint-config", "Lint Config", "Config", "Lint/Format Config")
            .combo("semi", "Semicolons", BOOL)
            .combo("singleQuote", "Single Quotes", BOOL)
            .combo("trailingComma", "Trailing Comma", &["all", "es5", "none"])
            .combo("tabWidth", "Tab Width", &["2", "4"])
            .combo("printWidth", "Print Width", &["80", "100", "120"]),
        Preset::new("vscode-settings", "VS Code Settings", "Config", "VS Code Settings")
            .combo("formatOnSave", "Format On Save", BOOL)
            .combo("tabSize", "Tab Size", &["2", "4"])
            .combo("insertSpaces", "Insert Spaces", BOOL)
            .combo("trimWhitespace", "Trim Trailing Whitespace", BOOL)
            .combo(
                "autoSave",
                "Auto Save",
                &["afterDelay", "onFocusChange", "off"],
            ),
        Preset::new("package-scripts", "Package Scripts", "Config", "Package Scripts")
            .entry("dev", "dev")
            .entry("build", "build")
            .entry("test", "test")
            .entry("lint", "lint")
            .entry("format", "format"),
        // DevOps
        Preset::new("docker", "Docker Config", "DevOps", "Docker Container")
            .entry("containerName", "Container Name")
            .entry("image", "Image")
            .entry("ports", "Port Mapping")
            .entry("volumes", "Volume Mapping")
            .combo(
                "restart",
                "Restart Policy",
                &["unless-stopped", "always", "on-failure", "no"],
            ),
        Preset::new("github-actions", "GitHub Actions", "DevOps", "GitHub Actions")
            .entry("name", "Workflow Name")
            .combo(
                "trigger",
                "Trigger",
                &["push", "pull_request", "workflow_dispatch", "schedule"],
            )
            .combo(
                "os",
                "Runner OS",
                &["ubuntu-latest", "macos-latest", "windows-latest"],
            )
            .entry("nodeVersion", "Node Version")
            .multiline("steps", "Custom Steps (optional)"),
        Preset::new("ssh-config", "SSH Config", "DevOps", "SSH Config")
            .entry("host", "Host Alias")
            .entry("hostname", "Hostname/IP")
            .entry("user", "User")
            .entry("port", "Port")
            .entry("identityFile", "Identity File"),
        // Services
        Preset::new("database", "Database Config", "Services", "Database Config")
            .combo(
                "type",
                "Type",
                &["PostgreSQL", "MySQL", "MongoDB", "Redis", "SQLite"],
            )
            .entry("host", "Host")
            .entry("port", "Port")
            .entry("database", "Database Name")
            .entry("username", "Username")
            .password("password", "Password")
            .combo("ssl", "SSL", &["false", "true", "require"]),
        Preset::new("api-config", "API Config", "Services", "API Configuration")
            .entry("service", "Service Name")
            .password("apiKey", "API Key")
            .entry("baseUrl", "Base URL")
            .combo(
                "environment",
                "Environment",
                &["Development", "Staging", "Production"],
            )
            .entry("rateLimit", "Rate Limit (req/min)"),
        // Docs
        Preset::new("readme", "README", "Docs", "README Generator")
            .entry("projectName", "Project Name")
            .multiline("description", "Description")
            .multiline("installation", "Installation")
            .multiline("usage", "Usage Example")
            .combo(
                "license",
                "License",
                &["MIT", "Apache-2.0", "GPL-3.0", "ISC", "Unlicense"],
            ),
        Preset::new("changelog", "Changelog Entry", "Docs", "Changelog Entry")
            .entry("version", "Version")
            .calendar("date", "Date")
            .multiline("added", "Added")
            .multiline("changed", "Changed")
            .multiline("fixed", "Fixed")
            .multiline("removed", "Removed"),
        Preset::new("blog-post", "Blog Post", "Docs", "Blog Post")
            .entry("title", "Title")
            .entry("author", "Author")
            .combo(
                "category",
                "Category",
                &["Tech", "Tutorial", "News", "Review", "Opinion"],
            )
            .entry("tags", "Tags (comma separated)")
            .calendar("publishDate", "Publish Date")
            .combo("draft", "Draft", BOOL),
        // Issues
        Preset::new("bug-report", "Bug Report", "Issues", "Bug Report")
            .entry("title", "Title")
            .combo("severity", "Severity", &["Critical", "High", "Medium", "Low"])
            .combo(
                "type",
                "Type",
                &["Bug", "Regression", "Performance", "Security"],
            )
            .multiline("steps", "Steps to Reproduce")
            .multiline("expected", "Expected Behavior")
            .multiline("actual", "Actual Behavior"),
        Preset::new("feature-request", "Feature Request", "Issues", "Feature Request")
            .entry("title", "Title")
            .combo("priority", "Priority", &["High", "Medium", "Low"])
            .combo(
                "category",
                "Category",
                &["Enhancement", "New Feature", "Improvement"],
            )
            .multiline("description", "Description")
            .multiline("useCase", "Use Case"),
    ]
}

/// Find a preset by id or display name (case-insensitive)
pub fn find_preset(name: &str) -> Option<Preset> {
    presets()
        .into_iter()
        .find(|p| p.id.eq_ignore_ascii_case(name) || p.name.eq_ignore_ascii_case(name))
}

/// Runs presets through a zenity instance
pub struct FormCollection<'a> {
    zenity: &'a Zenity,
}

impl<'a> FormCollection<'a> {
    pub fn new(zenity: &'a Zenity) -> Self {
        Self { zenity }
    }

    /// Show a preset and collect its values
    ///
    /// `title` replaces the preset's window title. Returns `None` when the
    /// form was not submitted. Fields zenity left out of its output map to
    /// empty strings.
    pub fn run(
        &self,
        preset: &Preset,
        title: Option<&str>,
    ) -> Result<Option<BTreeMap<String, String>>> {
        let options = FormsOptions::default().with_title(title.unwrap_or(preset.title));
        let result = self.zenity.forms(&preset.form_fields(), &options)?;
        debug!(preset = preset.id, button = result.button.as_str(), "form closed");

        let values = match result.values {
            Some(values) if result.is_submitted() => values,
            _ => return Ok(None),
        };

        Ok(Some(
            preset
                .keys()
                .enumerate()
                .map(|(i, key)| (key.to_string(), values.get(i).cloned().unwrap_or_default()))
                .collect(),
        ))
    }
}
