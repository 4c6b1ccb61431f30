use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Why a query could not be read.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("query is required: use a FILE argument, \"-\" for stdin, or -q/--query")]
    Missing,
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("failed to read '{}': {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Query text plus the label diagnostics are reported against.
#[derive(Debug)]
pub struct LoadedQuery {
    pub text: String,
    /// `None` for inline text.
    pub origin: Option<String>,
}

pub fn load_query(
    query_path: Option<&Path>,
    query_text: Option<&str>,
) -> Result<LoadedQuery, LoadError> {
    if let Some(text) = query_text {
        return Ok(LoadedQuery {
            text: text.to_owned(),
            origin: None,
        });
    }

    match query_path {
        Some(path) if path.as_os_str() == "-" => load_stdin(),
        Some(path) => load_file(path),
        None => Err(LoadError::Missing),
    }
}

fn load_stdin() -> Result<LoadedQuery, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    Ok(LoadedQuery {
        text: strip_line_ending(buf),
        origin: Some("<stdin>".to_owned()),
    })
}

fn load_file(path: &Path) -> Result<LoadedQuery, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(LoadedQuery {
        text: strip_line_ending(content),
        origin: Some(path.to_string_lossy().into_owned()),
    })
}

/// Editors and `echo` add a final newline that is not part of the query.
fn strip_line_ending(mut text: String) -> String {
    let trimmed = text.trim_end_matches(['\n', '\r']).len();
    text.truncate(trimmed);
    text
}
