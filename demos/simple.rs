//! First steps: serializing and parsing tagged content.
//!
//! Run with: `cargo run --example simple`

use indexmap::IndexMap;

fn main() -> tagform::Result<()> {
    // A list under the key "items".
    let items = vec!["sword".to_string(), "shield".to_string()];
    let text = tagform::to_string("items", &items)?;
    println!("list document:\n{text}");

    let back: Vec<String> = tagform::from_str(&text)?;
    assert_eq!(back, items);

    // A dictionary keyed by integers; keys appear in their text form.
    let mut scores = IndexMap::new();
    scores.insert(1i32, "x".to_string());
    scores.insert(2i32, "y".to_string());
    let text = tagform::to_string("scores", &scores)?;
    println!("dictionary document:\n{text}");

    // The dynamic layer reads any well-formed document without knowing
    // its shape up front.
    let (key, value) = tagform::read_document(&text)?;
    println!("root key: {key}, entries: {}", value.as_dictionary().unwrap().len());

    Ok(())
}
