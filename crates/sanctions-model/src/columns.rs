//! Column names of the raw extract and of the structured output.

/// Columns of the raw consolidated list, one row per name variant.
pub mod input {
    pub const GROUP_ID: &str = "Group ID";
    pub const ALIAS_TYPE: &str = "Alias Type";
    pub const GROUP_TYPE: &str = "Group Type";
    pub const REGIME: &str = "Regime";
    pub const TITLE: &str = "Title";
    pub const NAME_PARTS: [&str; 6] = ["Name 1", "Name 2", "Name 3", "Name 4", "Name 5", "Name 6"];
    pub const NAME_NON_LATIN: &str = "Name Non-Latin Script";
    pub const DOB: &str = "DOB";
    pub const COUNTRY_OF_BIRTH: &str = "Country of Birth";
    pub const NATIONALITY: &str = "Nationality";
    pub const COUNTRY: &str = "Country";
    pub const ADDRESS_LINES: [&str; 6] = [
        "Address 1",
        "Address 2",
        "Address 3",
        "Address 4",
        "Address 5",
        "Address 6",
    ];
    pub const POST_CODE: &str = "Post/Zip Code";
    pub const POSITION: &str = "Position";
    pub const PASSPORT_NUMBER: &str = "Passport Number";
    pub const NATIONAL_ID: &str = "National Identification Number";
    pub const LISTED_ON: &str = "Listed On";
    pub const DATE_DESIGNATED: &str = "UK Sanctions List Date Designated";
    pub const LAST_UPDATED: &str = "Last Updated";

    /// Every column the normalizer reads. A missing one aborts the run.
    pub const REQUIRED: [&str; 29] = [
        GROUP_ID,
        ALIAS_TYPE,
        GROUP_TYPE,
        REGIME,
        TITLE,
        NAME_PARTS[0],
        NAME_PARTS[1],
        NAME_PARTS[2],
        NAME_PARTS[3],
        NAME_PARTS[4],
        NAME_PARTS[5],
        NAME_NON_LATIN,
        DOB,
        COUNTRY_OF_BIRTH,
        NATIONALITY,
        COUNTRY,
        ADDRESS_LINES[0],
        ADDRESS_LINES[1],
        ADDRESS_LINES[2],
        ADDRESS_LINES[3],
        ADDRESS_LINES[4],
        ADDRESS_LINES[5],
        POST_CODE,
        POSITION,
        PASSPORT_NUMBER,
        NATIONAL_ID,
        LISTED_ON,
        DATE_DESIGNATED,
        LAST_UPDATED,
    ];
}

/// Columns of the structured output, one row per entity.
pub mod output {
    pub const GROUP_ID: &str = "Group ID";
    pub const PRIMARY_NAME: &str = "Primary_Name";
    pub const ALIASES: &str = "Aliases";
    pub const PRIMARY_NAME_NON_LATIN: &str = "Primary_Name_Non_Latin";
    pub const ALIASES_NON_LATIN: &str = "Aliases_Non_Latin";
    pub const GROUP_TYPE: &str = "Group_Type";
    pub const REGIME: &str = "Regime";
    pub const DOB_RAW: &str = "DOB_Raw_Agg";
    pub const DOB_PARSED: &str = "DOB_Parsed_Agg";
    pub const DOB_YEAR: &str = "DOB_Year_Agg";
    pub const DOB_PRECISION: &str = "DOB_Precision_Agg";
    pub const COUNTRIES_OF_BIRTH: &str = "Countries_of_Birth";
    pub const NATIONALITIES: &str = "Nationalities";
    pub const COUNTRIES_ADDRESS: &str = "Countries_Address";
    pub const ALL_COUNTRIES: &str = "All_Associated_Countries";
    pub const POSITIONS: &str = "Positions";
    pub const PASSPORT_NUMBERS: &str = "Passport_Numbers_Agg";
    pub const NATIONAL_IDS: &str = "National_IDs_Agg";
    pub const FULL_ADDRESS: &str = "Full_Address_Agg";
    pub const LISTED_ON: &str = "Listed_On";
    pub const DATE_DESIGNATED: &str = "UK_Sanctions_List_Date_Designated";
    pub const LAST_UPDATED: &str = "Last_Updated";

    /// Final column order of the exported table.
    pub const ORDER: [&str; 21] = [
        GROUP_ID,
        PRIMARY_NAME,
        ALIASES,
        PRIMARY_NAME_NON_LATIN,
        ALIASES_NON_LATIN,
        GROUP_TYPE,
        REGIME,
        DOB_PARSED,
        DOB_YEAR,
        DOB_PRECISION,
        COUNTRIES_OF_BIRTH,
        NATIONALITIES,
        COUNTRIES_ADDRESS,
        ALL_COUNTRIES,
        POSITIONS,
        PASSPORT_NUMBERS,
        NATIONAL_IDS,
        FULL_ADDRESS,
        LISTED_ON,
        DATE_DESIGNATED,
        LAST_UPDATED,
    ];

    /// Aggregated country and nationality lists, re-standardized after cleaning.
    pub const COUNTRY_LISTS: [&str; 4] =
        [COUNTRIES_OF_BIRTH, NATIONALITIES, COUNTRIES_ADDRESS, ALL_COUNTRIES];

    /// Metadata dates carried from the canonical row.
    pub const METADATA_DATES: [&str; 3] = [LISTED_ON, DATE_DESIGNATED, LAST_UPDATED];

    /// Columns that must never be null in a usable output.
    pub const CRITICAL: [&str; 4] = [GROUP_ID, PRIMARY_NAME, GROUP_TYPE, REGIME];

    /// Text columns checked for blank values.
    pub const KEY_TEXT: [&str; 3] = [PRIMARY_NAME, GROUP_TYPE, REGIME];
}
