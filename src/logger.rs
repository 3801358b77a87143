use crate::huffman::CodeTable;

const LOG_CONFIG_FILE: &str = "log4rs.yaml";

#[ctor::ctor]
fn init() {
    if let Err(e) = log4rs::init_file(LOG_CONFIG_FILE, Default::default()) {
        eprintln!("Logging disabled, unable to load {}: {}", LOG_CONFIG_FILE, e);
    }
}

pub fn log_code_table(code_table: &CodeTable) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    let entries: Vec<String> = code_table
        .iter()
        .map(|(symbol, code_word)| format!("{:?} -> {}", symbol, code_word))
        .collect();
    log::debug!(
        "Code table with {} entries\n{}",
        code_table.len(),
        entries.join("\n")
    );
}
