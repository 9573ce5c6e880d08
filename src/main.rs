use anyhow::{anyhow, Result};
use router::{Dispatch, RouterBuilder};
use structopt::StructOpt;

/// Resolve a request against a set of routes.
#[derive(Debug, StructOpt)]
#[structopt(name = "router-inspect")]
struct Args {
    /// Route definition as `METHOD PATTERN`, may be repeated
    #[structopt(short, long = "route")]
    routes: Vec<String>,

    /// Print the rule table
    #[structopt(short, long)]
    list: bool,

    /// Request method
    method: Option<String>,

    /// Request path
    path: Option<String>,
}

fn main() -> Result<()> {
    essentials::install();
    let args = Args::from_args();
    let router = args
        .routes
        .iter()
        .try_fold(RouterBuilder::new(), |builder, definition| {
            let (method, pattern) = definition
                .trim()
                .split_once(char::is_whitespace)
                .ok_or_else(|| anyhow!("Route must be `METHOD PATTERN`: {definition}"))?;
            Ok::<_, anyhow::Error>(builder.route_str(method, pattern.trim(), definition.clone())?)
        })?
        .build();

    if args.list {
        println!("{router}");
    }
    let (method, path) = match (args.method, args.path) {
        (Some(method), Some(path)) => (method, path),
        (None, None) => return Ok(()),
        _ => return Err(anyhow!("Both METHOD and PATH are required to dispatch")),
    };
    match router.dispatch_str(&method, &path)? {
        Dispatch::Matched { params, metadata } => {
            let mut params = params.into_iter().collect::<Vec<_>>();
            params.sort();
            println!("matched {metadata}");
            for (name, value) in params {
                println!("  {name} = {value}");
            }
        }
        Dispatch::NoMatch => println!("no match"),
        dispatch => {
            let status = dispatch.status().map(|status| status.to_string());
            let allow = dispatch
                .allow_header()
                .and_then(|allow| allow.to_str().map(str::to_string).ok());
            println!(
                "{} Allow: {}",
                status.unwrap_or_default(),
                allow.unwrap_or_default()
            );
        }
    }
    Ok(())
}
