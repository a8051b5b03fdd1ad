use colored::Colorize;
use regform::{Config, FieldId};

pub fn execute(config: &Config) {
    println!("{}", "Validated fields:".green().bold());
    for field in FieldId::ALL {
        println!("  {} {}", format!("{:<16}", field.id()).cyan(), config.labels.label(field));
    }
}
