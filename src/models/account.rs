use serde::{Deserialize, Serialize};

/// Individual seller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrivateAccount {
    pub first_name: String,
    pub last_name: String,
}

/// Company seller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessAccount {
    pub company_name: String,
    pub tax_id: String,
    pub contact_person: Option<String>,
}

/// Account kind, tagged so business fields can only exist on business accounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "accountType", rename_all = "lowercase")]
pub enum Account {
    Private(PrivateAccount),
    Business(BusinessAccount),
}

impl Account {
    pub fn display_name(&self) -> String {
        match self {
            Account::Private(p) => format!("{} {}", p.first_name, p.last_name),
            Account::Business(b) => b.company_name.clone(),
        }
    }

    pub fn is_business(&self) -> bool {
        matches!(self, Account::Business(_))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    #[serde(flatten)]
    pub account: Account,
}
