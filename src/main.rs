// prettahtml — HTML pretty-printer for template output
//
// Reads one file, collapses insignificant whitespace and re-indents the
// markup, and writes the result back (or to a second path). With template
// splitting enabled, `{{ }}`, `{% %}` and `{# #}` blocks are forwarded
// verbatim and only the literal markup between them is normalized, so the
// tool can be pointed at Jinja-style template sources directly.
//
// CLI flags:
//   --jinja      : force-enable template-delimiter splitting
//   --no-jinja   : force-disable template-delimiter splitting
//   --indent N   : spaces per indentation level (default 2)
// Default: splitting is enabled iff the input extension is one of
// .j2/.jinja/.jinja2/.tpl (case-insensitive).

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use memchr::{memchr, memchr_iter, memmem};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use prettahtml::{Fragment, PrettyPrinter};

/// CLI flags
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Force-enable template-delimiter splitting
    #[arg(long, action = ArgAction::SetTrue)]
    jinja: bool,

    /// Force-disable template-delimiter splitting
    #[arg(long = "no-jinja", action = ArgAction::SetTrue)]
    no_jinja: bool,

    /// Spaces per indentation level
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Input file
    input: PathBuf,

    /// Output file (default: overwrite input)
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let src = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;

    // Default: split if the extension looks like a template source.
    let default_jinja = cli.input.extension().map_or(false, |e| {
        let e = e.to_string_lossy();
        ["j2", "jinja", "jinja2", "tpl"]
            .iter()
            .any(|known| e.eq_ignore_ascii_case(known))
    });

    // Precedence: explicit flags override default; --no-jinja wins if both are present.
    let use_jinja = if cli.no_jinja {
        false
    } else if cli.jinja {
        true
    } else {
        default_jinja
    };

    let printer = PrettyPrinter::new().with_indent_unit(" ".repeat(cli.indent));
    let template = cli.input.display().to_string();

    let fragments = if use_jinja {
        split_fragments(&src)
    } else {
        vec![Fragment::Literal { text: &src, line: 1 }]
    };

    let mut out = printer.render_fragments(&template, fragments)?;
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }

    let out_path = cli.output.as_ref().unwrap_or(&cli.input);
    fs::write(out_path, out).with_context(|| format!("writing {}", out_path.display()))?;
    Ok(())
}

fn count_newlines(bytes: &[u8]) -> u32 {
    memchr_iter(b'\n', bytes).count() as u32
}

/// Splits template source into literal markup and pass-through delimiter
/// blocks. An unterminated block runs to end of input.
fn split_fragments(src: &str) -> Vec<Fragment<'_>> {
    let bytes = src.as_bytes();
    let mut fragments = Vec::new();
    let mut pos = 0;
    let mut line: u32 = 1;
    let mut search = 0;

    while let Some(off) = memchr(b'{', &bytes[search..]) {
        let at = search + off;
        let closer: &[u8] = match bytes.get(at + 1) {
            Some(b'{') => b"}}",
            Some(b'%') => b"%}",
            Some(b'#') => b"#}",
            _ => {
                search = at + 1;
                continue;
            }
        };
        let end = match memmem::find(&bytes[at + 2..], closer) {
            Some(o) => at + 2 + o + closer.len(),
            None => bytes.len(),
        };
        if at > pos {
            fragments.push(Fragment::Literal {
                text: &src[pos..at],
                line,
            });
            line += count_newlines(&bytes[pos..at]);
        }
        fragments.push(Fragment::PassThrough(&src[at..end]));
        line += count_newlines(&bytes[at..end]);
        pos = end;
        search = end;
    }
    if pos < bytes.len() {
        fragments.push(Fragment::Literal {
            text: &src[pos..],
            line,
        });
    }
    fragments
}
