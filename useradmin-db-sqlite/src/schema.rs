///////////////////////////////////////////////////////////////////////
// Identity provider
///////////////////////////////////////////////////////////////////////

table! {
    accounts (uid) {
        uid -> Text,
        email -> Nullable<Text>,
        disabled -> Bool,
    }
}

///////////////////////////////////////////////////////////////////////
// Document store
///////////////////////////////////////////////////////////////////////

table! {
    profiles (uid) {
        uid -> Text,
        role -> Text,
        status -> Text,
        disabled_at -> Nullable<BigInt>,
        disabled_by -> Nullable<Text>,
    }
}

table! {
    documents (rowid) {
        rowid -> BigInt,
        owner_uid -> Text,
        collection -> Text,
        id -> Text,
        content -> Text,
    }
}

allow_tables_to_appear_in_same_query!(accounts, profiles, documents);
