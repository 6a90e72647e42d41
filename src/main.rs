use log::info;
use outcome::{Outcome, Tag};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let start: Outcome<i32, String> = Outcome::Success(5);
    info!("starting chain from {}", start);

    let chained = start
        .map(|x| x + 1)
        .map_err(|s| format!("err:{}", s))
        .and_then(|c| Outcome::<String, String>::Failure(format!("Oh no..., init={}", c)))
        .map_err(|s| format!("propagate and mutate: {}", s));
    println!("{}", chained);

    let (exp, err, tag) = Outcome::<Vec<i32>, String>::Success(vec![1, 2]).into_parts();
    info!("decomposed into exp={:?}, err={:?}, tag={}", exp, err, tag);

    let rebuilt = Outcome::from_parts(exp, err, tag)?;
    let grown = rebuilt.map_member(|v| v.push(3)).unwrap_or(Vec::new());
    println!("rebuilt and grown: {:?}", grown);

    let fallback = Outcome::<i32, String>::from_parts(None, Some("broken".into()), Tag::Failure)?
        .map(|x| x * 2)
        .unwrap_or(0);
    println!("fallback: {}", fallback);

    Ok(())
}
