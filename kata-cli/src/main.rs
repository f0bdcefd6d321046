//! Kata CLI
//!
//! Builds CSS selectors and rectangles from the command line.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use kata_objects::{Rectangle, to_json};
use kata_selector::{Selector, SelectorError, Stringify, combine};
use owo_colors::OwoColorize;

/// Kata - object and CSS selector builder exercises
#[derive(Parser, Debug)]
#[command(name = "kata")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Build a compound selector
    kata selector --element a --attr 'href$=".png"' --pseudo-class focus

    # Join two selectors
    kata combine 'div#main' + 'table#data'

    # Rectangle area
    kata rect --width 10 --height 20
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build one compound selector; parts are applied in selector order
    Selector(SelectorArgs),

    /// Join two rendered selectors with a combinator (' ', '+', '~', '>')
    Combine {
        /// Left-hand selector text
        left: String,
        /// Combinator token
        combinator: String,
        /// Right-hand selector text
        right: String,
    },

    /// Print the area of a rectangle
    Rect {
        /// Rectangle width
        #[arg(long)]
        width: f64,
        /// Rectangle height
        #[arg(long)]
        height: f64,
        /// Print the rectangle as JSON instead
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Default)]
struct SelectorArgs {
    /// Type selector, e.g. `div`
    #[arg(long)]
    element: Option<String>,
    /// ID selector without `#`
    #[arg(long)]
    id: Option<String>,
    /// Class name without `.` (repeatable)
    #[arg(long = "class")]
    classes: Vec<String>,
    /// Attribute expression without brackets (repeatable)
    #[arg(long = "attr")]
    attrs: Vec<String>,
    /// Pseudo-class without `:` (repeatable)
    #[arg(long = "pseudo-class")]
    pseudo_classes: Vec<String>,
    /// Pseudo-element without `::`
    #[arg(long)]
    pseudo_element: Option<String>,
    /// Print the selector parts as JSON instead
    #[arg(long)]
    json: bool,
}

impl SelectorArgs {
    /// Apply every given part to a fresh selector, in selector order.
    fn build(&self) -> Result<Selector, SelectorError> {
        let mut selector = Selector::new();
        if let Some(name) = &self.element {
            selector = selector.element(name.as_str())?;
        }
        if let Some(value) = &self.id {
            selector = selector.id(value.as_str())?;
        }
        for name in &self.classes {
            selector = selector.class(name.as_str())?;
        }
        for expr in &self.attrs {
            selector = selector.attr(expr.as_str())?;
        }
        for name in &self.pseudo_classes {
            selector = selector.pseudo_class(name.as_str())?;
        }
        if let Some(name) = &self.pseudo_element {
            selector = selector.pseudo_element(name.as_str())?;
        }
        Ok(selector)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Selector(args) => {
            let selector = args.build()?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&selector)?);
            } else if selector.is_empty() {
                eprintln!("{}", "(empty selector)".dimmed());
            } else {
                println!("{}", selector.stringify());
            }
        }
        Command::Combine {
            left,
            combinator,
            right,
        } => {
            println!("{}", combine(left.as_str(), &combinator, right.as_str()));
        }
        Command::Rect {
            width,
            height,
            json,
        } => {
            let rect = Rectangle::new(width, height);
            if json {
                println!("{}", to_json(&rect)?);
            } else {
                println!("{}", rect.area());
            }
        }
    }

    Ok(())
}
