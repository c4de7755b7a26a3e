//! TypeScript type generation.
//!
//! Writes `.ts` definitions for every API payload so a front end can share
//! them. Runs as part of the test suite.

#[cfg(test)]
mod tests {
    use std::{env, path::PathBuf};

    use ts_rs::TS;

    #[test]
    fn generate_typescript_types() {
        // CONTACT_TS_OUTPUT_DIR wins; otherwise ts-bindings/ at the workspace root
        let output_dir = env::var("CONTACT_TS_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../ts-bindings"));

        std::fs::create_dir_all(&output_dir).expect("Failed to create output directory");

        use crate::api::status::HealthStatus;
        use crate::api::{ErrorResponse, MessageResponse};
        use crate::models::*;

        ContactForm::export_all_to(&output_dir).expect("Failed to export ContactForm type");
        ContactFormInput::export_all_to(&output_dir)
            .expect("Failed to export ContactFormInput type");
        ContactFormChanges::export_all_to(&output_dir)
            .expect("Failed to export ContactFormChanges type");
        DeletedContactForm::export_all_to(&output_dir)
            .expect("Failed to export DeletedContactForm type");

        ErrorResponse::export_all_to(&output_dir).expect("Failed to export ErrorResponse type");
        MessageResponse::export_all_to(&output_dir)
            .expect("Failed to export MessageResponse type");
        HealthStatus::export_all_to(&output_dir).expect("Failed to export HealthStatus type");

        assert!(output_dir.join("ContactForm.ts").exists());
        println!("TypeScript types generated successfully in {:?}", output_dir);
    }
}
