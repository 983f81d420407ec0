//! Walkthrough of the container lifecycle: fill, borrow, transform, extract,
//! fall back.
//!
//! Run with `cargo run --example basic_usage`.

use solo::{none, some, Opt};

fn main() {
    // Start empty.
    let mut greeting: Opt<String> = Opt::new();
    assert!(greeting.is_none());

    // Fill by replacement; the prior content (none, here) is returned.
    greeting.replace(String::from("hello"));
    println!("after replace: {greeting}");

    // Extraction moves the value out and empties the container.
    let word = greeting.unwrap().expect("just filled");
    println!("unwrapped: {word:?}, container is now {greeting}");

    // Fallbacks are consumed only on the empty path.
    println!("fallback: {:?}", greeting.unwrap_or(String::from(" world")));

    // Borrow instead of consuming: the owner keeps its value.
    greeting.replace(String::from("im here"));
    let length = greeting
        .as_ref()
        .map(|name| format!("{name}, too!"))
        .map(|s| s.len());
    println!("mapped through a borrow: {length}, owner still {greeting}");

    // Combinator chains short-circuit on none without running any step.
    let computed = some(5).map(|n| n * n).map(|n| n + 1).map(|n| n / 2);
    let skipped = none::<i32>().map(|n| n * n).map(|n| n + 1).map(|n| n / 2);
    println!("computed: {computed}, skipped: {skipped}");

    // Deferred invocation: pair the value with a method, call it later.
    let title = some(String::from("optional values"));
    let shouted = title.bind(|s: String| s.to_uppercase()).map(|m| m.invoke());
    println!("invoked later: {shouted}");
}
