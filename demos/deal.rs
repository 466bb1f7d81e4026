//! High-card demo: deals two hands per round and shows them on a label.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::{Card, CardDeck, DeckOptions, DrawError, Label, format_cards};

const HAND_SIZE: usize = 3;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("High-card demo (Enter to deal, 'd' for debug deck, 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut deck = CardDeck::with_options(DeckOptions::default(), seed);
    let mut label = Label::new();

    loop {
        match prompt_line("> ").as_str() {
            "q" | "quit" => break,
            "d" | "debug" => {
                deck.debug_reset();
                println!("Loaded debug deck ({} cards).", deck.remaining());
                continue;
            }
            _ => {}
        }

        let (you, dealer) = match deal_round(&mut deck) {
            Ok(hands) => hands,
            Err(DrawError::DeckExhausted | DrawError::NotEnoughCards { .. }) => {
                println!("Deck exhausted, reshuffling.");
                deck.reset();
                label.switch(false);
                continue;
            }
        };

        label.display(format!(
            "you: {}  dealer: {}  -> {}",
            format_cards(&you),
            format_cards(&dealer),
            verdict(&you, &dealer)
        ));
        render(&label);
    }
}

fn deal_round(deck: &mut CardDeck) -> Result<(Vec<Card>, Vec<Card>), DrawError> {
    let you = deck.draw_many(HAND_SIZE)?;
    let dealer = deck.draw_many(HAND_SIZE)?;
    Ok((you, dealer))
}

fn verdict(you: &[Card], dealer: &[Card]) -> &'static str {
    match (Card::max_rank(you), Card::max_rank(dealer)) {
        (Ok(a), Ok(b)) if a > b => "you win",
        (Ok(a), Ok(b)) if a < b => "dealer wins",
        _ => "push",
    }
}

fn render(label: &Label) {
    if label.is_visible() {
        println!("{}", label.text());
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).unwrap_or(0) == 0 {
        return "q".to_string();
    }
    line.trim().to_lowercase()
}
