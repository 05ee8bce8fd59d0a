use crate::CLAP_STYLING;
use clap::{arg, command};
use url::Url;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("catscout")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("catscout")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("find")
                .about(
                    "Find a random sample of articles in need of attention in or below \
                a category.",
                )
                .arg(
                    arg!(-c --"category" <NAME>)
                        .required(true)
                        .help("The root category to search below"),
                )
                .arg(
                    arg!(-s --"service-url" <URL>)
                        .required(false)
                        .help("Base URL of the category graph service")
                        .value_parser(clap::value_parser!(Url))
                        .default_value("http://localhost:8000"),
                )
                .arg(
                    arg!(-d --"depth" <LEVELS>)
                        .required(false)
                        .help("How many levels of subcategories to expand")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("3"),
                )
                .arg(
                    arg!(-n --"limit" <NUM>)
                        .required(false)
                        .help("Maximum number of articles to return")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("10"),
                )
                .arg(
                    arg!(--"timeout" <SECONDS>)
                        .required(false)
                        .help("Request timeout in seconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("10"),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json, markdown")
                        .value_parser(["text", "json", "markdown"])
                        .default_value("text"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save report to file (default: display to screen)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                ),
        )
        .subcommand(
            command!("suggest")
                .about("Suggest random categories to start from")
                .arg(
                    arg!(-n --"count" <NUM>)
                        .required(false)
                        .help("Number of suggestions")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("3"),
                )
                .arg(
                    arg!(-i --"index" <PATH>)
                        .required(false)
                        .help(
                            "Path to the category index file (default: \
                        ~/.config/catscout/categories.json)",
                        ),
                ),
        )
        .subcommand(
            command!("complete")
                .about("List categories starting with the given letters")
                .arg(
                    arg!([PREFIX])
                        .required(true)
                        .help("The first letters of the category name"),
                )
                .arg(
                    arg!(-i --"index" <PATH>)
                        .required(false)
                        .help(
                            "Path to the category index file (default: \
                        ~/.config/catscout/categories.json)",
                        ),
                ),
        )
}
