use rocket::{config::Config as RocketCfg, Rocket, Route};
use time::Duration;

use crate::core::policy::AdminPolicy;

pub mod api;
mod guards;
pub mod jwt;
mod sqlite;


#[derive(Clone)]
pub struct Cfg {
    pub policy: AdminPolicy,
    pub jwt_secret: String,
    pub token_valid_for: Duration,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;
    let Cfg {
        policy,
        jwt_secret,
        token_valid_for,
    } = cfg;

    if !policy.authorize_disable {
        warn!("Accounts may be disabled without a privileged caller");
    }
    let jwt_state = jwt::JwtState::new(&jwt_secret, token_valid_for);

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r.manage(db).manage(jwt_state).manage(policy);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", api::routes())]
}

pub async fn run(db: sqlite::Connections, enable_cors: bool, cfg: Cfg) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
    };
    let instance = rocket_instance(options, db);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                log::error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        log::error!("Unable to run web server: {err}");
    }
}
