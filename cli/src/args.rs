use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use lzw_core::constants::{DEFAULT_BUFFER_SIZE, MAX_BUFFER_SIZE};
use lzw_core::Direction;

#[derive(Parser, Debug)]
#[command(name = "lzw")]
#[command(about = "Lossless fixed-width (16-bit) LZW compressor")]
#[command(version)]
#[command(group(ArgGroup::new("mode").required(true).args(["compress", "decompress"])))]
#[command(after_long_help = r#"
EXAMPLES:
    lzw --compress input.bmp output.lzw
    lzw --decompress output.lzw input.bmp

INPUT and OUTPUT must be distinct files.
"#)]
pub struct Cli {
    /// Compress INPUT into OUTPUT
    #[arg(long)]
    pub compress: bool,

    /// Decompress INPUT into OUTPUT
    #[arg(long, visible_alias = "dcompress")]
    pub decompress: bool,

    /// File to read
    pub input: PathBuf,

    /// File to create or overwrite
    pub output: PathBuf,

    /// I/O buffer size in bytes
    #[arg(long, default_value_t = DEFAULT_BUFFER_SIZE, value_parser = parse_buffer_size)]
    pub buffer_size: usize,

    /// Print run telemetry as JSON instead of the one-line summary
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn direction(&self) -> Direction {
        if self.compress {
            Direction::Compress
        } else {
            Direction::Decompress
        }
    }
}

fn parse_buffer_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|e| format!("`{}` is not a byte count: {}", s, e))?;
    if size == 0 || size > MAX_BUFFER_SIZE {
        return Err(format!("must be between 1 and {}", MAX_BUFFER_SIZE));
    }
    Ok(size)
}
