use anyhow::Context;
use boolyard::Postfix;
use std::env;

fn main() -> anyhow::Result<()> {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "boolyard".into());

    let expression = match args.next() {
        Some(expression) => expression,
        None => {
            println!("usage {} \"infix boolean expression\"", program);
            println!("e.g. \"( T & F | ( T & ! T ) )\"");
            return Ok(());
        }
    };

    let postfix = Postfix::parse(&expression)
        .with_context(|| format!("could not convert `{}`", expression))?;
    println!("{}", postfix);
    Ok(())
}
