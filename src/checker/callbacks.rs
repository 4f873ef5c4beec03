/*!
Callbacks associated with a checker.

At present the only callback is made on a [miss](crate::reports::Report::Miss), with the term database and the representative literal.
The callback is made only when [miss diagnostics](crate::config::Config::miss_diagnostics) are enabled.
*/

use crate::{db::term::TermDB, structures::term::TermKey};

use super::Checker;

pub type CallbackOnMiss = dyn FnMut(&TermDB, TermKey);

impl Checker {
    pub fn set_callback_miss(&mut self, callback: Box<CallbackOnMiss>) {
        self.callback_miss = Some(callback);
    }

    pub fn make_callback_miss(&mut self, db: &TermDB, representative: TermKey) {
        if let Some(callback) = &mut self.callback_miss {
            callback(db, representative);
        }
    }
}
