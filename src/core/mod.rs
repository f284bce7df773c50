pub type FieldId = String;
pub type SectionKey = String;
