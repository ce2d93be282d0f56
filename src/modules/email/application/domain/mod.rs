pub mod contact_template;
