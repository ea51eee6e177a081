//! Open command - resolve a path and render the matching view

use std::sync::Arc;

use clap::Args;

use crate::domain::{Route, UserApi};
use crate::infrastructure::user::{UserDetailsService, UserListService};

use super::render::{render_details, render_list};

/// Arguments for the open command
#[derive(Args, Clone, Debug)]
pub struct OpenArgs {
    /// Path such as `/` or `/user/3`
    pub path: String,
}

/// Run the open command
pub async fn run<A: UserApi>(api: Arc<A>, args: OpenArgs) -> anyhow::Result<()> {
    let route = Route::parse(&args.path)
        .ok_or_else(|| anyhow::anyhow!("Unknown route: {}", args.path))?;

    print!("{}", render_route(api, route).await);
    Ok(())
}

/// Render a freshly-mounted view for a route
pub async fn render_route<A: UserApi>(api: Arc<A>, route: Route) -> String {
    match route {
        Route::UserList => {
            let mut service = UserListService::new(api);
            service.mount().await;
            render_list(service.state())
        }
        Route::UserDetails(id) => {
            let details = UserDetailsService::new(api).load(id).await;
            render_details(&details)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{Address, MockUserApi, User, UserId};

    fn api() -> Arc<MockUserApi> {
        Arc::new(MockUserApi::with_users(vec![User::new(
            UserId::new(1),
            "Leanne Graham",
            "Sincere@april.biz",
            "1-770-736-8031",
            Address::new("Kulas Light", "Gwenborough"),
        )]))
    }

    #[tokio::test]
    async fn test_render_list_route() {
        let out = render_route(api(), Route::UserList).await;
        assert!(out.contains("Leanne Graham"));
    }

    #[tokio::test]
    async fn test_render_detail_route() {
        let out = render_route(api(), Route::UserDetails(UserId::new(1))).await;
        assert!(out.contains("User Details"));

        let out = render_route(api(), Route::UserDetails(UserId::new(2))).await;
        assert_eq!(out, "No user found\n");
    }

    #[tokio::test]
    async fn test_unknown_route_is_error() {
        let args = OpenArgs {
            path: "/nowhere".to_string(),
        };
        let err = run(api(), args).await.unwrap_err();
        assert_eq!(err.to_string(), "Unknown route: /nowhere");
    }
}
