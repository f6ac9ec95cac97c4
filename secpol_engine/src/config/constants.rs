pub mod compile_time {
    pub mod files {
        /// Export snapshot file name inside the temp directory
        pub const EXPORT_FILE_NAME: &str = "secedit.inf";

        pub const IMPORT_FILE_PREFIX: &str = "infimport";
        pub const DATABASE_FILE_PREFIX: &str = "sdbimport";
        pub const LOG_FILE_PREFIX: &str = "logout";

        /// chrono format used to stamp transient file names
        pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

        /// Largest export file the store will read (16MB)
        /// SECURITY: a real export is well under 100KB
        pub const MAX_EXPORT_SIZE: u64 = 16 * 1024 * 1024;

        /// Largest desired-state document accepted (1MB)
        pub const MAX_DESIRED_STATE_SIZE: u64 = 1024 * 1024;
    }

    pub mod inf {
        pub const UNICODE_SECTION: &str = "Unicode";
        pub const VERSION_SECTION: &str = "Version";
        pub const SIGNATURE: &str = "$CHICAGO$";
        pub const REVISION: &str = "1";
    }

    pub mod tools {
        pub const DEFAULT_TEMP_DIR: &str = r"C:\Windows\Temp";
        pub const SECEDIT: &str = "secedit.exe";
        pub const REG: &str = "reg.exe";
        pub const POWERSHELL: &str = "powershell.exe";

        /// Default subprocess timeout. A full `/configure` can take a while.
        pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 120;
        pub const MAX_COMMAND_TIMEOUT_SECS: u64 = 3600;
    }
}
