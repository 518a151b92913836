//! Walks through the deck and vector protocols, printing each result.

use deckvec::{CardDeck, Vector2D};

fn main() {
    let deck = CardDeck::new();
    println!("{}", deck.size());
    let pair: Vec<String> = deck.slice(3..5).iter().map(ToString::to_string).collect();
    println!("[{}]", pair.join(", "));

    for card in deck.rev() {
        println!("{card}");
    }

    let v = Vector2D::new(5.0, 3.0);
    println!("{v}");
    println!("{}", v.magnitude());
    println!("{}", v.is_non_zero());

    let v1 = Vector2D::new(4.0, 2.0);
    let v2 = Vector2D::new(3.0, 1.0);
    println!("{}", v1 + v2);
    println!("{}", v * 3.0);
}
