pub mod catalog;
pub mod config;
pub mod find;
pub mod report;
pub mod suggest;

pub use config::ScoutConfig;

pub fn print_banner() {
    println!(
        r#"
           _                   _
  ___ __ _| |_ ___ __ ___ _  _| |_
 / __/ _` | __/ __|/ __/ _ \| | | __|
| (_| (_| | |_\__ \ (_| (_) | |_| | |_
 \___\__,_|\__|___/\___\___/ \__,_|\__|

 finds wiki articles in need of attention
"#
    );
}
