use serde_json::{json, Value};

use super::*;
use crate::web::sqlite;

pub mod prelude {
    use crate::web::{self, api, sqlite};

    pub use crate::web::{tests::prelude::*, Cfg};

    pub fn setup() -> (Client, sqlite::Connections) {
        setup_with_cfg(test_cfg())
    }

    pub fn setup_with_cfg(cfg: Cfg) -> (Client, sqlite::Connections) {
        web::tests::rocket_test_setup_with_cfg(vec![("/", api::routes())], cfg)
    }

    pub fn test_json(r: &LocalResponse) {
        assert_eq!(
            r.headers().get("Content-Type").collect::<Vec<_>>()[0],
            "application/json"
        );
    }
}

use self::prelude::*;

fn add_user(pool: &sqlite::Connections, email: Option<&str>, role: &str) -> Uid {
    let account = match email {
        Some(email) => Account::build().email(email).finish(),
        None => Account::build().finish(),
    };
    let db = pool.exclusive().unwrap();
    db.create_account(&account).unwrap();
    db.create_profile(&Profile::new(account.uid.clone(), role.into()))
        .unwrap();
    account.uid
}

fn add_documents(pool: &sqlite::Connections, owner: &Uid, collection: &str, count: usize) {
    let db = pool.exclusive().unwrap();
    for i in 0..count {
        let document = Document {
            id: DocumentId::new(),
            content: format!(r#"{{"n":{i}}}"#),
        };
        db.add_document(owner, collection, &document).unwrap();
    }
}

fn count_documents(pool: &sqlite::Connections, owner: &Uid, collection: &str) -> usize {
    let db = pool.exclusive().unwrap();
    db.list_document_ids(owner, collection).unwrap().len()
}

fn call(client: &Client, path: &str, caller: Option<&Uid>, body: &str) -> (Status, Value) {
    let mut req = client.post(path).header(ContentType::JSON).body(body);
    if let Some(uid) = caller {
        req = req.header(bearer_token(uid));
    }
    let res = req.dispatch();
    let status = res.status();
    test_json(&res);
    let body = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    (status, body)
}

fn assert_error(body: &Value, code: &str) {
    assert_eq!(body["error"]["status"], code);
    assert!(body["error"]["message"].is_string());
}

mod delete_user {
    use super::*;

    #[test]
    fn without_caller() {
        let (client, db) = setup();
        let target = add_user(&db, Some("worker@example.com"), "ouvrier");
        let body = json!({"data": {"userId": target.as_str()}}).to_string();
        let (status, res) = call(&client, "/deleteUser", None, &body);
        assert_eq!(status, Status::Unauthorized);
        assert_error(&res, "UNAUTHENTICATED");
        assert_eq!(
            res["error"]["message"],
            "You must be signed in to call this function"
        );
        assert!(db.exclusive().unwrap().get_account(&target).is_ok());
    }

    #[test]
    fn with_invalid_token() {
        let (client, db) = setup();
        let target = add_user(&db, None, "ouvrier");
        let res = client
            .post("/deleteUser")
            .header(ContentType::JSON)
            .header(rocket::http::Header::new(
                "Authorization",
                "Bearer not.a.token",
            ))
            .body(json!({"data": {"userId": target.as_str()}}).to_string())
            .dispatch();
        assert_eq!(res.status(), Status::Unauthorized);
    }

    #[test]
    fn as_unprivileged_caller() {
        let (client, db) = setup();
        let worker = add_user(&db, None, "ouvrier");
        let target = add_user(&db, None, "ouvrier");
        let body = json!({"data": {"userId": target.as_str()}}).to_string();
        let (status, res) = call(&client, "/deleteUser", Some(&worker), &body);
        assert_eq!(status, Status::Forbidden);
        assert_error(&res, "PERMISSION_DENIED");
    }

    #[test]
    fn as_caller_without_profile() {
        let (client, _db) = setup();
        let body = json!({"data": {"userId": "whatever"}}).to_string();
        let (status, res) = call(&client, "/deleteUser", Some(&Uid::new()), &body);
        assert_eq!(status, Status::Forbidden);
        assert_error(&res, "PERMISSION_DENIED");
    }

    #[test]
    fn without_target() {
        let (client, db) = setup();
        let admin = add_user(&db, None, DEFAULT_PRIVILEGED_ROLE);
        let (status, res) = call(&client, "/deleteUser", Some(&admin), r#"{"data":{}}"#);
        assert_eq!(status, Status::BadRequest);
        assert_error(&res, "INVALID_ARGUMENT");
        assert_eq!(res["error"]["message"], "userId or userEmail required");
    }

    #[test]
    fn with_malformed_body() {
        let (client, db) = setup();
        let admin = add_user(&db, None, DEFAULT_PRIVILEGED_ROLE);
        let (status, res) = call(&client, "/deleteUser", Some(&admin), "{");
        assert_eq!(status, Status::BadRequest);
        assert_error(&res, "INVALID_ARGUMENT");
    }

    #[test]
    fn unknown_user() {
        let (client, db) = setup();
        let admin = add_user(&db, None, DEFAULT_PRIVILEGED_ROLE);
        let body = json!({"data": {"userId": "does-not-exist"}}).to_string();
        let (status, res) = call(&client, "/deleteUser", Some(&admin), &body);
        assert_eq!(status, Status::NotFound);
        assert_error(&res, "NOT_FOUND");
        assert_eq!(
            res["error"]["message"],
            "User with UID does-not-exist not found"
        );
    }

    #[test]
    fn by_email() {
        let (client, db) = setup();
        let admin = add_user(&db, None, DEFAULT_PRIVILEGED_ROLE);
        let target = add_user(&db, Some("worker@example.com"), "ouvrier");
        let other = add_user(&db, None, "ouvrier");
        add_documents(&db, &target, "projets", 3);
        add_documents(&db, &target, "rapports", 1);
        add_documents(&db, &target, "notes", 2);
        add_documents(&db, &other, "projets", 1);

        let body = json!({"data": {"userEmail": "Worker@Example.com"}}).to_string();
        let (status, res) = call(&client, "/deleteUser", Some(&admin), &body);
        assert_eq!(status, Status::Ok);
        assert_eq!(
            res,
            json!({"result": {
                "success": true,
                "message": "User worker@example.com deleted successfully.",
                "uid": target.as_str(),
                "email": "worker@example.com",
            }})
        );

        {
            let conn = db.exclusive().unwrap();
            assert!(conn.get_account(&target).is_err());
            assert!(conn.try_get_profile(&target).unwrap().is_none());
        }
        assert_eq!(count_documents(&db, &target, "projets"), 0);
        assert_eq!(count_documents(&db, &target, "rapports"), 0);
        assert_eq!(count_documents(&db, &target, "notes"), 2);
        assert_eq!(count_documents(&db, &other, "projets"), 1);

        // Deleting again is reported as not found
        let body = json!({"data": {"userId": target.as_str()}}).to_string();
        let (status, res) = call(&client, "/deleteUser", Some(&admin), &body);
        assert_eq!(status, Status::NotFound);
        assert_error(&res, "NOT_FOUND");
    }
}

mod disable_user {
    use super::*;

    #[test]
    fn as_privileged_caller() {
        let (client, db) = setup();
        let admin = add_user(&db, None, DEFAULT_PRIVILEGED_ROLE);
        let target = add_user(&db, None, "ouvrier");
        add_documents(&db, &target, "chantiers", 2);

        let body = json!({"data": {"userId": target.as_str()}}).to_string();
        let (status, res) = call(&client, "/disableUser", Some(&admin), &body);
        assert_eq!(status, Status::Ok);
        assert_eq!(res["result"]["success"], true);
        assert_eq!(
            res["result"]["message"],
            format!("User {target} disabled successfully.")
        );

        {
            let conn = db.exclusive().unwrap();
            assert!(conn.get_account(&target).unwrap().disabled);
            let profile = conn.get_profile(&target).unwrap();
            assert_eq!(profile.status, ProfileStatus::Disabled);
            assert_eq!(profile.disabled_by, Some(admin));
            assert!(profile.disabled_at.is_some());
        }
        assert_eq!(count_documents(&db, &target, "chantiers"), 2);
    }

    #[test]
    fn without_caller() {
        let (client, db) = setup();
        let target = add_user(&db, None, "ouvrier");
        let body = json!({"data": {"userId": target.as_str()}}).to_string();
        let (status, res) = call(&client, "/disableUser", None, &body);
        assert_eq!(status, Status::Unauthorized);
        assert_error(&res, "UNAUTHENTICATED");
        assert!(!db.exclusive().unwrap().get_account(&target).unwrap().disabled);
    }

    #[test]
    fn unknown_user() {
        let (client, db) = setup();
        let admin = add_user(&db, None, DEFAULT_PRIVILEGED_ROLE);
        let body = json!({"data": {"userId": "does-not-exist"}}).to_string();
        let (status, res) = call(&client, "/disableUser", Some(&admin), &body);
        assert_eq!(status, Status::InternalServerError);
        assert_error(&res, "INTERNAL");
    }

    #[test]
    fn missing_user_id() {
        let (client, db) = setup();
        let admin = add_user(&db, None, DEFAULT_PRIVILEGED_ROLE);
        for body in [json!({"data": {}}), json!({"data": {"userId": ""}})] {
            let (status, res) = call(&client, "/disableUser", Some(&admin), &body.to_string());
            assert_eq!(status, Status::InternalServerError);
            assert_error(&res, "INTERNAL");
        }
    }

    #[test]
    fn as_unprivileged_caller_if_not_required_by_policy() {
        let mut cfg = test_cfg();
        cfg.policy.authorize_disable = false;
        let (client, db) = setup_with_cfg(cfg);
        let worker = add_user(&db, None, "ouvrier");
        let target = add_user(&db, None, "ouvrier");

        let body = json!({"data": {"userId": target.as_str()}}).to_string();
        let (status, _) = call(&client, "/disableUser", Some(&worker), &body);
        assert_eq!(status, Status::Ok);
        assert!(db.exclusive().unwrap().get_account(&target).unwrap().disabled);

        let (status, res) = call(&client, "/disableUser", None, &body);
        assert_eq!(status, Status::InternalServerError);
        assert_error(&res, "INTERNAL");
    }
}
