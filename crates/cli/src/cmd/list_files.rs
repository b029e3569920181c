use docpen_core::markdown::{discover_markdown_files, MarkdownFile};
use serde::Serialize;
use std::path::Path;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct FileRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Directory")]
    dir: String,
}

#[derive(Debug, Serialize)]
struct FileOutput {
    name: String,
    dir: String,
    path: String,
}

impl From<&MarkdownFile> for FileOutput {
    fn from(f: &MarkdownFile) -> Self {
        Self {
            name: f.name.clone(),
            dir: f.dir.display().to_string(),
            path: f.path().display().to_string(),
        }
    }
}

pub fn run(config: Option<&Path>, profile: Option<&str>, json: bool) {
    let rc = super::load_config_or_exit(config, profile, "list-files");
    crate::logging::init(&rc.logging);

    let files = match discover_markdown_files(&rc.docs_root, &rc.excluded_folders) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("FAIL docpen list-files");
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if json {
        let out: Vec<FileOutput> = files.iter().map(FileOutput::from).collect();
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
        return;
    }

    if files.is_empty() {
        println!("(no markdown files found)");
        return;
    }

    let rows: Vec<FileRow> = files
        .iter()
        .map(|f| FileRow { name: f.name.clone(), dir: f.dir.display().to_string() })
        .collect();
    println!("{}", Table::new(&rows).with(Style::rounded()).to_string());
    println!("-- {} files --", files.len());
}
