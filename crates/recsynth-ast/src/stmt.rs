use crate::{Expr, Ident};
use serde::{Deserialize, Serialize};

///
/// Stmt
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Stmt {
    Let { name: Ident, init: Expr },
    Expr(Expr),
    Return(Expr),
}

impl Stmt {
    #[must_use]
    pub fn let_(name: &Ident, init: Expr) -> Self {
        Self::Let {
            name: name.clone(),
            init,
        }
    }
}
