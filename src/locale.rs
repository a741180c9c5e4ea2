//! Hungarian UI strings and CSV vocabulary
//!
//! The library is localized for Hungarian only: column labels, the header
//! keyword used for header detection, and every user-visible notice live here.

/// Export column labels, in field order
pub const COLUMN_LABELS: [&str; 5] = [
    "Név",
    "Meghatározás",
    "Jellemzők",
    "Példák",
    "Ellenpéldák",
];

/// Lowercase word that marks the first line of an import as a header row
pub const HEADER_KEYWORD: &str = "név";

/// Name given to imported rows whose name column is blank
pub const UNNAMED: &str = "Névtelen";

/// Default download name for exports
pub const DEFAULT_EXPORT_FILE_NAME: &str = "freyer_konyvtar.csv";

pub const FORM_TITLE_CREATE: &str = "Új fogalom hozzáadása";
pub const FORM_TITLE_EDIT: &str = "Fogalom szerkesztése";

pub const NOTHING_IMPORTED: &str = "Nem sikerült új fogalmakat beolvasni.";
pub const NOTHING_TO_EXPORT: &str = "Nincs mit exportálni.";
pub const NAME_REQUIRED: &str = "A név megadása kötelező.";
pub const SAVE_EXPIRED: &str =
    "A könyvtár időközben megváltozott, a mentés nem történt meg. Kérjük, mentse újra.";

pub fn imported(count: usize) -> String {
    format!("{} fogalom sikeresen importálva.", count)
}

pub fn overwrite_prompt(name: &str) -> String {
    format!("A(z) \"{}\" nevű fogalom már létezik. Felülírja?", name)
}

pub fn init_failed(detail: &str) -> String {
    format!("Hiba történt az alkalmazás indításakor: {}", detail)
}

pub fn file_read_failed(detail: &str) -> String {
    format!("Nem sikerült beolvasni a fájlt: {}", detail)
}

pub fn export_failed(detail: &str) -> String {
    format!("Az exportálás nem sikerült: {}", detail)
}
