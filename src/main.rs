use clap::Parser;
use matheval::evaluate_once;

/// matheval evaluates infix arithmetic expressions such as `69*a + sin(3.14)`
/// against named variable bindings.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Binds a variable to a value, e.g. `-b a=3.5`. The first binding
    /// occupies input slot 0, the second slot 1, and so on.
    #[arg(short, long = "bind", value_name = "NAME=VALUE", value_parser = parse_binding)]
    bindings: Vec<(String, f32)>,

    /// The expression to evaluate.
    expression: String,
}

fn parse_binding(raw: &str) -> Result<(String, f32), String> {
    let Some((name, value)) = raw.split_once('=') else {
        return Err(format!("'{raw}' is not of the form NAME=VALUE"));
    };
    let value = value.parse::<f32>()
                     .map_err(|_| format!("'{value}' is not a number"))?;
    Ok((name.to_string(), value))
}

/// Evaluates with the arity fixed at `S`; bindings occupy slots in the order
/// they were given on the command line.
fn run<const S: usize>(expression: &str,
                       bindings: &[(String, f32)])
                       -> Result<f32, Box<dyn std::error::Error>> {
    let slots = bindings.iter()
                        .enumerate()
                        .map(|(slot, (name, _))| (name.clone(), slot))
                        .collect();

    let mut inputs = [0.0_f32; S];
    for (slot, (_, value)) in bindings.iter().enumerate() {
        inputs[slot] = *value;
    }

    evaluate_once(expression, slots, &inputs)
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    // The input arity is a compile-time parameter of the evaluator, so the
    // binary supports a fixed range of binding counts.
    let result = match args.bindings.len() {
        0 => run::<0>(&args.expression, &args.bindings),
        1 => run::<1>(&args.expression, &args.bindings),
        2 => run::<2>(&args.expression, &args.bindings),
        3 => run::<3>(&args.expression, &args.bindings),
        4 => run::<4>(&args.expression, &args.bindings),
        5 => run::<5>(&args.expression, &args.bindings),
        6 => run::<6>(&args.expression, &args.bindings),
        7 => run::<7>(&args.expression, &args.bindings),
        8 => run::<8>(&args.expression, &args.bindings),
        n => {
            eprintln!("At most 8 variable bindings are supported, but {n} were given.");
            std::process::exit(1);
        },
    };

    match result {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
