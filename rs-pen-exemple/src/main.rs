use rs_pen_core::pen::corpus::{Corpus, Token};
use rs_pen_core::pen::comparer::OrdinalIgnoreCase;
use rs_pen_core::pen::generator::{Author, Pen};
use rs_pen_core::pen::render::RenderInput;
use rs_pen_core::tokenizer::builder::tokenize_lines;
use rs_pen_core::tokenizer::options::TokenizerOptions;
use rs_pen_core::tokenizer::splitters::{CharTokenizer, SeparatorTokenizer};

const SAMPLE: &str = "\
the sun rose over the quiet harbour
the boats swayed and the gulls cried
a fisherman hauled the nets onto the pier
the nets were heavy with the night's catch
over the water the morning light spread";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let lines: Vec<String> = SAMPLE.lines().map(str::to_owned).collect();

    // Word-level corpus: split each line on spaces, mark line breaks with
    // a dedicated token, intern repeated words so they share storage
    let words = SeparatorTokenizer::new(" ")?;
    let options = TokenizerOptions {
        line_token: Some("\n".to_owned()),
        ..TokenizerOptions::default()
    };
    let tokens: Vec<Token> = tokenize_lines(&words, &lines, &options);

    // The sentinel is a value no token compares equal to, so only the
    // corpus end terminates generation. The comparer folds ASCII case.
    let corpus = Corpus::new(tokens, None, Box::new(OrdinalIgnoreCase), true);
    let pen = Pen::new(corpus);

    // Render a word sequence conditioned on the last 2 tokens.
    // The sequence is lazy and unbounded; cap it before joining.
    let input = RenderInput::new(2);
    for seed in 0..3 {
        let rendered: Vec<String> = pen
            .render_seeded(&input, seed)?
            .take(30)
            .map(|token| token.as_deref().unwrap_or_default().to_owned())
            .collect();
        println!("Seed {}: {}", seed, rendered.join(" "));
    }

    // The default picker decorrelates runs without an explicit seed
    let free_run: Vec<String> = pen
        .render(&input)?
        .take(15)
        .map(|token| token.as_deref().unwrap_or_default().to_owned())
        .collect();
    println!("Unseeded: {}", free_run.join(" "));

    // Deterministic seeding replays the corpus itself: starting at
    // offset 0 with order 4, the first 4 tokens come straight from the
    // corpus before sampling takes over
    let replay: Vec<String> = pen
        .render_seeded(&RenderInput::with_start(4, 0), 7)?
        .take(12)
        .map(|token| token.as_deref().unwrap_or_default().to_owned())
        .collect();
    println!("Replayed: {}", replay.join(" "));

    // Character-level corpus over the same text
    let characters = tokenize_lines(&CharTokenizer, &lines, &options);
    let char_pen = Pen::new(Corpus::from_tokens(characters));
    let prose: String = char_pen
        .render_seeded(&RenderInput::new(3), 11)?
        .take(120)
        .map(|token| token.as_deref().unwrap_or_default().to_owned())
        .collect();
    println!("Characters: {}", prose);

    Ok(())
}
