use coffeescraper::{catalog::CountryIndex, load_records, COLUMNS};
use std::{env, path::Path, process::exit};

fn main() {
    // Expect exactly one CLI argument: path to an exported JSON file.
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <JSON_FILE>", args[0]);
        exit(1);
    }
    if let Err(e) = inspect(Path::new(&args[1])) {
        eprintln!("Error: {:#}", e);
        exit(1);
    }
}

/// Print the record count, short rows, and every record as a tab-separated line.
fn inspect(path: &Path) -> anyhow::Result<()> {
    let records = load_records(path)?;
    let short = records.iter().filter(|r| r.len() < COLUMNS.len()).count();
    let index = CountryIndex::new(records.iter().cloned());

    println!("=== {} ===", path.display());
    println!("Records:              {}", records.len());
    println!("Distinct countries:   {}", index.len());
    println!("Short rows:           {}", short);
    println!();

    println!("{}", COLUMNS.join("\t"));
    for r in &records {
        let line: Vec<&str> = r.fields().iter().map(|f| f.unwrap_or("-")).collect();
        println!("{}", line.join("\t"));
    }
    Ok(())
}
