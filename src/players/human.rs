use super::Player;
use crate::NodeId;
use crate::play::Level;
use crate::play::Outcome;
use crate::tree::Color;
use crate::tree::Tree;
use colored::ColoredString;
use colored::Colorize;
use dialoguer::Select;

/// Interactive player at the terminal.
#[derive(Debug, Default)]
pub struct Human;

impl Player for Human {
    fn decide(&mut self, tree: &Tree, level: &Level) -> Option<NodeId> {
        if !level.is_open() {
            return None;
        }
        let ids = tree.internals().map(|n| n.id()).collect::<Vec<_>>();
        let mut labels = ids.iter().map(|&id| Self::label(tree, id)).collect::<Vec<_>>();
        labels.push(String::from("quit"));
        let choice = Self::selection(&labels, tree, level)?;
        ids.get(choice).copied()
    }
    fn notify(&mut self, outcome: &Outcome) {
        if !outcome.accepted {
            println!("{}", "ignored".dimmed());
            return;
        }
        for delta in outcome.deltas.iter() {
            println!("  {}", delta);
        }
        match outcome.combo() {
            0 | 1 => println!("+{}", outcome.score_delta),
            n => println!("+{} ({} matches)", outcome.score_delta, n),
        }
    }
}

impl Human {
    fn selection(labels: &[String], tree: &Tree, level: &Level) -> Option<usize> {
        Select::new()
            .with_prompt(format!("\n{}\n\n{}", render(tree), level))
            .report(false)
            .items(labels)
            .default(0)
            .interact()
            .ok()
    }
    fn label(tree: &Tree, id: NodeId) -> String {
        let ring = tree
            .preview(id)
            .unwrap_or_default()
            .into_iter()
            .map(|i| tree.color(i).map_or('.', |c| c.letter()))
            .collect::<String>();
        format!("rotate #{:<2} [{}]", id, ring)
    }
}

/// Board as centered rows, one per depth, each node labelled `<id><color>`.
pub fn render(tree: &Tree) -> String {
    const CELL: usize = 5;
    let leaves = tree.level(tree.depth()).count();
    (0..=tree.depth())
        .map(|depth| {
            let row = tree.level(depth).collect::<Vec<_>>();
            let span = leaves * CELL / row.len().max(1);
            row.into_iter()
                .map(|node| {
                    let letter = node.color().map_or('.', |c| c.letter());
                    let label = format!("{}{}", node.id(), letter);
                    let pad = span.saturating_sub(label.len());
                    format!(
                        "{}{}{}",
                        " ".repeat(pad / 2),
                        paint(node.color(), &label),
                        " ".repeat(pad - pad / 2)
                    )
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn paint(color: Option<Color>, label: &str) -> ColoredString {
    match color {
        Some(Color::Red) => label.red().bold(),
        Some(Color::Blue) => label.blue().bold(),
        Some(Color::Green) => label.green().bold(),
        Some(Color::Yellow) => label.yellow().bold(),
        None => label.dimmed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_show_the_ring() {
        let tree = Tree::shape(2, 2).paint("R BG YRGB").unwrap();
        assert_eq!(Human::label(&tree, 0), "rotate #0  [RBG]");
        assert_eq!(Human::label(&tree, 2), "rotate #2  [GGB]");
    }

    #[test]
    fn render_has_a_row_per_depth() {
        colored::control::set_override(false);
        let tree = Tree::shape(2, 2).paint("R BG Y.GB").unwrap();
        let rendered = render(&tree);
        let rows = rendered.lines().map(str::trim).collect::<Vec<_>>();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], "0R");
        assert!(rows[2].contains("4."));
        assert!(rows[2].starts_with("3Y"));
    }
}
