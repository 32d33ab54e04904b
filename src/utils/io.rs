use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::{EdgeConfig, SceneConfig, DEFAULT_TITLE};
use crate::error::{WalkthroughError, WalkthroughResult};

/// reads a scene config. files ending in `.json` are parsed with serde, everything else with `parse_scene_text`
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_scene_config(path: &dyn AsRef<Path>) -> WalkthroughResult<SceneConfig> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);

    let is_json = path.extension().map_or(false, |extension| extension == "json");
    let config = if is_json {
        serde_json::from_reader(reader)
            .map_err(|error| WalkthroughError::config(format!("{}: {}", path.display(), error)))?
    }
    else {
        parse_scene_lines(reader.lines())?
    };

    tracing::debug!(num_vertices = config.vertices.len(), num_edges = config.edges.len(), "scene config loaded");
    Ok(config)
}

/// parses the line based scene format:
///
/// ```text
/// t Dijkstra on a small graph
/// v A
/// v B
/// a A B 2
/// q A B
/// ```
///
/// `t` sets the title (optional), `v` declares a vertex, `a` an undirected edge with its weight and `q` the start and end vertex.
/// empty lines and lines starting with `#` are ignored
pub fn parse_scene_text(text: &str) -> WalkthroughResult<SceneConfig> {
    parse_scene_lines(text.lines().map(|line| Ok(line.to_string())))
}

fn parse_scene_lines(lines: impl Iterator<Item = std::io::Result<String>>) -> WalkthroughResult<SceneConfig> {
    let mut title = DEFAULT_TITLE.to_string();
    let mut vertices = Vec::new();
    let mut edges = Vec::new();
    let mut query: Option<(String, String)> = None;

    for (line_index, line) in lines.enumerate() {
        let line = line?;
        let line_number = line_index + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() || is_comment_line(trimmed) {
            continue;
        }

        let split = trimmed.split_whitespace().collect::<Vec<&str>>();

        match split[0] {
            "t" => title = split[1..].join(" "),
            "v" => {
                let [label] = expect_fields::<1>(&split, line_number)?;
                vertices.push(label.to_string());
            }
            "a" => {
                let [from, to, weight] = expect_fields::<3>(&split, line_number)?;
                let weight: f64 = weight.parse()
                    .map_err(|_| WalkthroughError::config(format!("line {}: invalid weight {}", line_number, weight)))?;

                edges.push(EdgeConfig {from: from.to_string(), to: to.to_string(), weight});
            }
            "q" => {
                let [start, end] = expect_fields::<2>(&split, line_number)?;
                query = Some((start.to_string(), end.to_string()));
            }
            other => return Err(WalkthroughError::config(format!("line {}: unknown line type {}", line_number, other))),
        }
    }

    let (start, end) = query.ok_or_else(|| WalkthroughError::config("missing query line (q <start> <end>)"))?;

    Ok(SceneConfig {title, vertices, edges, start, end})
}

fn expect_fields<'a, const N: usize>(split: &[&'a str], line_number: usize) -> WalkthroughResult<[&'a str; N]> {
    <[&str; N]>::try_from(&split[1..]).map_err(|_| {
        WalkthroughError::config(format!("line {}: expected {} fields after {}, found {}", line_number, N, split[0], split.len() - 1))
    })
}

fn is_comment_line(line: &str) -> bool {
    line.starts_with('#')
}
