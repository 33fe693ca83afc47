use std::fs;

use jsonnode::Node;

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

struct Args {
    iterations: usize,
    input: String,
    method: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = pico_args::Arguments::from_env();
    let args = Args {
        iterations: args.value_from_str("--iterations")?,
        input: args.value_from_str("--input")?,
        method: args.value_from_str("--method")?,
    };

    let text = fs::read_to_string(&args.input)?;

    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    match args.method.as_str() {
        "parse" => {
            for _ in 0..args.iterations {
                let _ = text.parse::<Node>()?;
            }
        }
        "render" => {
            let node: Node = text.parse()?;
            for _ in 0..args.iterations {
                let _ = node.to_string();
            }
        }
        "eq" => {
            let first: Node = text.parse()?;
            let second = first.clone();
            for _ in 0..args.iterations {
                let _ = first == second && first.eq_lexical(&second);
            }
        }
        "clone" => {
            let node: Node = text.parse()?;
            for _ in 0..args.iterations {
                let _ = node.clone();
            }
        }
        _ => {
            return Err(format!(
                "Invalid method `{}`. Valid methods: parse, render, eq, clone",
                args.method
            )
            .into())
        }
    }

    Ok(())
}
