use serde::{Deserialize, Serialize};

use crate::error::FormError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Image,
}

impl DocumentKind {
    /// Anything whose MIME type mentions "image" is an image, the rest is treated as PDF
    pub fn from_mime(mime: &str) -> Self {
        if mime.contains("image") {
            DocumentKind::Image
        } else {
            DocumentKind::Pdf
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "📄",
            DocumentKind::Image => "🖼️",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatientDocument {
    pub id: String,
    pub name: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub kind: DocumentKind,
    /// Only known for documents uploaded during this session
    #[serde(default)]
    pub size_bytes: Option<u64>,
}

impl PatientDocument {
    pub fn new(id: &str, name: &str, date: &str, kind: DocumentKind) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            date: date.to_string(),
            kind,
            size_bytes: None,
        }
    }

    pub fn size_label(&self) -> Option<String> {
        self.size_bytes.map(mb_label)
    }

    /// Number the document as the `n+1`-th of a list holding `existing`
    pub fn assign_id(&mut self, existing: usize) {
        self.id = format!("doc{}", existing + 1);
    }
}

fn mb_label(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

/// Metadata of the file picked in the upload dialog
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    pub file_name: String,
    pub mime: String,
    pub size_bytes: u64,
}

impl SelectedFile {
    /// `"1.50 MB"`
    pub fn size_label(&self) -> String {
        mb_label(self.size_bytes)
    }

    /// File name up to the first dot
    pub fn stem(&self) -> &str {
        self.file_name.split('.').next().unwrap_or("")
    }
}

/// Upload dialog state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentDraft {
    pub name: String,
    pub file: Option<SelectedFile>,
}

impl DocumentDraft {
    /// Picking a file pre-fills an empty name
    pub fn select_file(&mut self, file: SelectedFile) {
        if self.name.is_empty() {
            self.name = file.stem().to_string();
        }
        self.file = Some(file);
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Turn the draft into the `n+1`-th document of the list
    pub fn commit(&self, existing: usize, today: &str) -> Result<PatientDocument, FormError> {
        let file = match (&self.file, self.name.is_empty()) {
            (Some(file), false) => file,
            _ => return Err(FormError::MissingDocument),
        };

        let mut document = PatientDocument {
            id: String::new(),
            name: self.name.clone(),
            date: today.to_string(),
            kind: DocumentKind::from_mime(&file.mime),
            size_bytes: Some(file.size_bytes),
        };
        document.assign_id(existing);
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, mime: &str) -> SelectedFile {
        SelectedFile {
            file_name: name.to_string(),
            mime: mime.to_string(),
            size_bytes: 1_572_864,
        }
    }

    #[test]
    fn test_select_file_fills_empty_name_only() {
        let mut draft = DocumentDraft::default();
        draft.select_file(file("lab.results.pdf", "application/pdf"));
        assert_eq!(draft.name, "lab");

        draft.set_name("Lipid panel");
        draft.select_file(file("scan.png", "image/png"));
        assert_eq!(draft.name, "Lipid panel");
    }

    #[test]
    fn test_commit_derives_id_and_kind() {
        let mut draft = DocumentDraft::default();
        draft.select_file(file("xray.jpeg", "image/jpeg"));

        let doc = draft.commit(3, "2024-06-01").expect("file and name present");
        assert_eq!(doc.id, "doc4");
        assert_eq!(doc.name, "xray");
        assert_eq!(doc.kind, DocumentKind::Image);
        assert_eq!(doc.date, "2024-06-01");
        assert_eq!(doc.size_bytes, Some(1_572_864));

        let mut draft = DocumentDraft::default();
        draft.select_file(file("notes.txt", "text/plain"));
        assert_eq!(draft.commit(0, "2024-06-01").unwrap().kind, DocumentKind::Pdf);
    }

    #[test]
    fn test_commit_requires_file_and_name() {
        let mut draft = DocumentDraft::default();
        draft.set_name("Orphan");
        assert_eq!(draft.commit(0, "2024-06-01"), Err(FormError::MissingDocument));

        let mut draft = DocumentDraft::default();
        draft.select_file(file(".hidden", "application/pdf"));
        assert_eq!(draft.name, "");
        assert_eq!(draft.commit(0, "2024-06-01"), Err(FormError::MissingDocument));

        // only an empty name is missing, blanks are kept as typed
        draft.set_name("  ");
        assert_eq!(draft.commit(0, "2024-06-01").unwrap().name, "  ");
    }

    #[test]
    fn test_size_label() {
        assert_eq!(file("a.pdf", "application/pdf").size_label(), "1.50 MB");
    }
}
