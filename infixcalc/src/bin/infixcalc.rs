mod repl {
    use infixcalc::{format_result, EvaluationError, RPNExpr, ShuntingParser};

    pub fn manual() {
        println!("Infix Calculator");
        println!();
        println!("\tAvailable Operators:");
        println!("\t\t+ = add");
        println!("\t\t- = subtract");
        println!("\t\t* = multiply");
        println!("\t\t/ = divide");
        println!("\t\t^ = power");
        println!("\t\tsin = sine");
        println!("\t\tcos = cosine");
        println!("\t\ttan = tangent");
        println!("\t\tcot = cotangent");
        println!("\t\tlog = logarithm base 10");
        println!("\t\tln = natural logarithm");
        println!();
        println!("\tAvailable Brackets:");
        println!("\t\t() = parentheses");
        println!("\t\t{{}} = braces");
        println!();
        println!("\tWarnings:");
        println!("\t\tOperators must be written exactly as shown above.");
        println!("\t\tFunctions take a bracketed operand, eg: sin(1).");
        println!("\t\tIncorrect syntax is reported as an error.");
        println!();
        println!("\tExample Expressions:");
        println!("\t\t3 + 4 * 2 / (1 - 5)^(2^3)");
        println!("\t\tsin(1)^2 + 2");
        println!("\t\t(-sin(1) + 1) (1 / -cos(1))");
        println!();
        println!("\tAdditional Options:");
        println!("\t\tTo see this manual again type \"help\".");
        println!("\t\tTo exit this calculator type \"exit\".");
    }

    fn parse_eval(input: &str) -> Result<(RPNExpr, f64), EvaluationError> {
        let rpn = ShuntingParser::parse_str(input)?;
        let value = rpn.eval()?;
        Ok((rpn, value))
    }

    fn report(e: &EvaluationError) {
        println!("{} error: {}", e.class(), e);
    }

    // one-shot mode, echo back how the expression was understood
    pub fn evalexpr(input: &str) {
        match parse_eval(input) {
            Err(e) => report(&e),
            Ok((expr, result)) => println!("{} = {}", expr, format_result(result)),
        }
    }

    pub fn evalline(input: &str) {
        match infixcalc::evaluate(input) {
            Err(e) => report(&e),
            Ok(result) => println!("{}", result),
        }
    }
}

fn history_path() -> Option<std::path::PathBuf> {
    match std::env::var_os("INFIXCALC_HISTORY") {
        Some(path) => Some(path.into()),
        None => dirs::home_dir().map(|h| h.join(".infixcalc_history")),
    }
}

fn main() -> Result<(), String> {
    env_logger::init();

    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        repl::evalexpr(&input);
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    let histpath = history_path();
    if let Some(path) = &histpath {
        if rl.load_history(path).is_err() {
            log::info!("No history yet at {}", path.display());
        }
    }

    repl::manual();
    loop {
        match rl.readline("\n>> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => match line.trim() {
                "" => continue,
                "help" => repl::manual(),
                "exit" => break,
                input => {
                    let _ = rl.add_history_entry(input);
                    repl::evalline(input);
                }
            },
        }
    }

    if let Some(path) = &histpath {
        rl.save_history(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}
