use anyhow::Context;

use shift32::{bit_shift_left, bit_shift_right};

pub fn main_inner() -> anyhow::Result<()> {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);

    let (Some(op), Some(value), Some(amount)) = (args.next(), args.next(), args.next()) else {
        anyhow::bail!("usage: shift32 <shl|shr> <value> <amount>");
    };

    let value = value
        .parse::<i64>()
        .with_context(|| format!("invalid value {value:?}"))?;

    let amount = amount
        .parse::<i32>()
        .with_context(|| format!("invalid shift amount {amount:?}"))?;

    log::debug!("op: {op}, value: {value}, amount: {amount}");

    let result = match op.as_str() {
        "shl" => bit_shift_left(value, amount),
        "shr" => bit_shift_right(value, amount),
        op => anyhow::bail!("unknown operation {op:?}; expected \"shl\" or \"shr\""),
    };

    println!("{result}");

    Ok(())
}
