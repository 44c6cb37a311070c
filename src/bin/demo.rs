//! Demonstration of the suffix trie: the classic "cgi" scenario, the four
//! lookup modes, segmentation-driven bulk insertion, and tree rendering.

use suffix_trie::{segment, Match, SuffixTree};

fn main() {
    example_lookup_modes();
    example_segmentation();
}

fn show(query: &str, m: Option<Match>) {
    match m {
        Some(m) => println!(
            "  {:10} -> [{}] at {}..{}",
            query,
            &query[m.start..m.end()],
            m.start,
            m.end()
        ),
        None => println!("  {:10} -> no match", query),
    }
}

fn example_lookup_modes() {
    println!("=== Lookup Modes ===\n");

    let mut tree = SuffixTree::new();
    tree.insert_word(b"cgi");

    let queries = ["cgi", "xcgi", "cgi-bin"];

    println!("lookup_string (first suffix that is a registered word):");
    for q in queries {
        show(q, tree.lookup_string(q.as_bytes()));
    }

    println!("\nlookup_full_string (whole query must be a registered word):");
    for q in queries {
        show(q, tree.lookup_full_string(q.as_bytes()));
    }

    println!("\nlookup_substrings (all suffixes that are registered words):");
    for q in queries {
        let matches = tree.lookup_substrings(q.as_bytes());
        println!("  {:10} -> {} match(es)", q, matches.len());
        for m in matches {
            println!("    [{}] at {}..{}", &q[m.start..m.end()], m.start, m.end());
        }
    }

    println!("\nlookup_max_substrings (longest reachable substrings):");
    for q in queries {
        let matches = tree.lookup_max_substrings(q.as_bytes());
        println!("  {:10} -> {} match(es)", q, matches.len());
        for m in matches {
            println!("    [{}] at {}..{}", &q[m.start..m.end()], m.start, m.end());
        }
    }

    println!("\nTree for insert_word(\"cgi\"):");
    print!("{}", tree.render());
    println!();
}

fn example_segmentation() {
    println!("=== Segmentation + Trie ===\n");

    let text = "The tree doesn't forget: bandana, band, banana!";
    let tokens = segment(text);
    println!("input:  {:?}", text);
    println!("tokens: {:?}\n", tokens);

    let mut tree = SuffixTree::new();
    for token in &tokens {
        tree.insert_full_word(token.to_lowercase().as_bytes());
    }

    for q in ["band", "bandana", "ana", "doesn't"] {
        show(q, tree.lookup_full_string(q.as_bytes()));
    }

    let stats = tree.stats();
    println!(
        "\n{} nodes, {} words, depth {}, ~{} bytes",
        stats.node_count, stats.word_count, stats.max_depth, stats.node_bytes
    );
    println!("\nTree:");
    print!("{}", tree.render());
}
