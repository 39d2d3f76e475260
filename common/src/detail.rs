use crate::model::lead::LeadRecord;
use crate::view_model::DetailView;

/// Holds the lead shown in the detail dialog.
///
/// Independent of the list: the uid does not have to be in the current view,
/// and loading a detail never touches the dataset. Requests are neither
/// queued nor coalesced, so whichever response arrives last is shown.
#[derive(Debug, Default)]
pub struct DetailLoader {
    shown: Option<DetailView>,
}

impl DetailLoader {
    pub fn loaded(&mut self, record: &LeadRecord) {
        self.shown = Some(DetailView::from_record(record));
    }

    pub fn close(&mut self) {
        self.shown = None;
    }

    pub fn shown(&self) -> Option<&DetailView> {
        self.shown.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(uid: &str, name: &str) -> LeadRecord {
        LeadRecord {
            uid: uid.to_string(),
            user_name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn last_response_wins() {
        let mut detail = DetailLoader::default();
        detail.loaded(&lead("b", "Bea"));
        detail.loaded(&lead("a", "Ann"));
        assert_eq!(detail.shown().unwrap().user_name, "Ann");
    }

    #[test]
    fn close_hides_the_dialog() {
        let mut detail = DetailLoader::default();
        detail.loaded(&lead("a", "Ann"));
        assert_eq!(detail.shown().unwrap().uid, "a");

        detail.close();
        assert!(detail.shown().is_none());
    }
}
