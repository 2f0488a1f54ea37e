//! Parse and evaluate "What is ..." word problems, strictly left to right.

/// Evaluate questions like "What is 5 plus 13?". Supported operations:
/// plus, minus, multiplied by, divided by, raised to the Nth power.
/// Returns `None` for anything malformed or unrecognized.
pub fn answer(command: &str) -> Option<i64> {
    let expression = command
        .strip_prefix("What is")?
        .strip_suffix('?')?
        .trim();
    if expression.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = expression.split_whitespace().collect();
    let mut iter = tokens.iter().peekable();

    let mut acc: i64 = parse_number(iter.next()?)?;
    while let Some(&token) = iter.next() {
        let operand_token = match token {
            "plus" | "minus" => *iter.next()?,
            "multiplied" | "divided" => {
                if *iter.next()? != "by" {
                    return None;
                }
                *iter.next()?
            }
            "raised" => {
                // raised to the Nth power
                if *iter.next()? != "to" || *iter.next()? != "the" {
                    return None;
                }
                let ordinal = *iter.next()?;
                if *iter.next()? != "power" {
                    return None;
                }
                let exp: u32 = ordinal
                    .trim_end_matches("st")
                    .trim_end_matches("nd")
                    .trim_end_matches("rd")
                    .trim_end_matches("th")
                    .parse()
                    .ok()?;
                acc = acc.checked_pow(exp)?;
                continue;
            }
            _ => return None,
        };
        let operand = parse_number(operand_token)?;
        acc = match token {
            "plus" => acc.checked_add(operand)?,
            "minus" => acc.checked_sub(operand)?,
            "multiplied" => acc.checked_mul(operand)?,
            "divided" => acc.checked_div(operand)?,
            _ => unreachable!(),
        };
    }
    Some(acc)
}

fn parse_number(token: &str) -> Option<i64> {
    token.parse().ok()
}
