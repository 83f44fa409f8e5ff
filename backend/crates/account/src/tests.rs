//! Crate tests for the account context
//! Use cases run against the in-memory store; router tests drive the axum
//! `Router` end to end.

mod use_case_tests {
    use std::sync::Arc;

    use jsonwebtoken::{DecodingKey, Validation, decode};
    use kernel::id::AccountId;
    use platform::token::{Claims, TokenKeys};
    use serde_json::json;

    use crate::application::*;
    use crate::domain::entity::ficha::{FichaPatch, Path};
    use crate::domain::repository::FichaRepository;
    use crate::domain::value_object::point_pool::PointPool;
    use crate::error::AccountError;
    use crate::infra::memory::InMemoryAccountStore;

    const SECRET: &[u8] = b"account-tests-secret";

    fn store() -> Arc<InMemoryAccountStore> {
        Arc::new(InMemoryAccountStore::new())
    }

    async fn register(store: &Arc<InMemoryAccountStore>, email: &str) -> AccountId {
        RegisterUseCase::new(store.clone(), Arc::new(AccountConfig::default()))
            .execute(RegisterInput {
                username: "alice".into(),
                email: email.into(),
                password: "pw".into(),
            })
            .await
            .unwrap()
            .account_id
    }

    async fn patch_ficha(store: &Arc<InMemoryAccountStore>, id: AccountId, patch: serde_json::Value) {
        let patch: FichaPatch = serde_json::from_value(patch).unwrap();
        UpdateFichaUseCase::new(store.clone())
            .execute(id, patch)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_register_creates_zero_valued_ficha() {
        let store = store();
        let id = register(&store, "alice@example.com").await;

        let ficha = store.find_by_account(&id).await.unwrap().unwrap();
        assert_eq!(ficha.pools.get(PointPool::Cards), 0);
        assert_eq!(ficha.pools.get(PointPool::Posters), 0);
        assert_eq!(ficha.pools.get(PointPool::Paths), 0);
        assert!(ficha.paths.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let store = store();
        register(&store, "alice@example.com").await;

        let result = RegisterUseCase::new(store.clone(), Arc::new(AccountConfig::default()))
            .execute(RegisterInput {
                username: "other".into(),
                email: "ALICE@example.com".into(),
                password: "x".into(),
            })
            .await;

        assert!(matches!(result, Err(AccountError::EmailTaken)));
    }

    #[tokio::test]
    async fn test_register_requires_every_field() {
        let result = RegisterUseCase::new(store(), Arc::new(AccountConfig::default()))
            .execute(RegisterInput {
                username: "alice".into(),
                email: "alice@example.com".into(),
                password: String::new(),
            })
            .await;

        assert!(matches!(result, Err(AccountError::MissingFields)));
    }

    #[tokio::test]
    async fn test_login_issues_one_day_token_for_account() {
        let store = store();
        let id = register(&store, "alice@example.com").await;
        let tokens = Arc::new(TokenKeys::from_secret(SECRET).unwrap());

        let output = LoginUseCase::new(store.clone(), Arc::new(AccountConfig::default()), tokens)
            .execute(LoginInput {
                email: "alice@example.com".into(),
                password: "pw".into(),
            })
            .await
            .unwrap();

        let claims = decode::<Claims>(
            &output.token,
            &DecodingKey::from_secret(SECRET),
            &Validation::default(),
        )
        .unwrap()
        .claims;

        assert_eq!(claims.sub, id.into_uuid());
        assert_eq!(claims.exp - claims.iat, 86_400);
        assert_eq!(output.account.account_id, id);
    }

    #[tokio::test]
    async fn test_login_failures() {
        let store = store();
        register(&store, "alice@example.com").await;
        let use_case = LoginUseCase::new(
            store.clone(),
            Arc::new(AccountConfig::default()),
            Arc::new(TokenKeys::from_secret(SECRET).unwrap()),
        );

        let wrong_password = use_case
            .execute(LoginInput {
                email: "alice@example.com".into(),
                password: "nope".into(),
            })
            .await;
        assert!(matches!(wrong_password, Err(AccountError::InvalidCredentials)));

        let unknown = use_case
            .execute(LoginInput {
                email: "bob@example.com".into(),
                password: "pw".into(),
            })
            .await;
        assert!(matches!(unknown, Err(AccountError::AccountNotFound)));
    }

    #[tokio::test]
    async fn test_spend_on_empty_pool_fails_without_mutation() {
        let store = store();
        let id = register(&store, "alice@example.com").await;

        let result = SpendPointUseCase::new(store.clone())
            .execute(id, PointPool::Cards)
            .await;
        assert!(matches!(
            result,
            Err(AccountError::InsufficientPoints(PointPool::Cards))
        ));

        let ficha = store.find_by_account(&id).await.unwrap().unwrap();
        assert_eq!(ficha.pools.get(PointPool::Cards), 0);
    }

    #[tokio::test]
    async fn test_spend_decrements_by_one_and_persists() {
        let store = store();
        let id = register(&store, "alice@example.com").await;
        patch_ficha(&store, id, json!({ "pathPoints": 3 })).await;

        let remaining = SpendPointUseCase::new(store.clone())
            .execute(id, PointPool::Paths)
            .await
            .unwrap();

        assert_eq!(remaining, 2);
        let ficha = store.find_by_account(&id).await.unwrap().unwrap();
        assert_eq!(ficha.pools.get(PointPool::Paths), 2);
    }

    #[tokio::test]
    async fn test_concurrent_spends_on_last_point() {
        let store = store();
        let id = register(&store, "alice@example.com").await;
        patch_ficha(&store, id, json!({ "cartasPontosDisponiveis": 1 })).await;

        let first = tokio::spawn({
            let store = store.clone();
            async move { store.spend_point(&id, PointPool::Cards).await }
        });
        let second = tokio::spawn({
            let store = store.clone();
            async move { store.spend_point(&id, PointPool::Cards).await }
        });

        let results = [first.await.unwrap(), second.await.unwrap()];
        let successes = results.iter().filter(|r| r.is_ok()).count();
        let insufficient = results
            .iter()
            .filter(|r| matches!(r, Err(AccountError::InsufficientPoints(_))))
            .count();

        assert_eq!(successes, 1);
        assert_eq!(insufficient, 1);
        let ficha = store.find_by_account(&id).await.unwrap().unwrap();
        assert_eq!(ficha.pools.get(PointPool::Cards), 0);
    }

    #[tokio::test]
    async fn test_update_ficha_is_shallow_merge() {
        let store = store();
        let id = register(&store, "alice@example.com").await;
        patch_ficha(
            &store,
            id,
            json!({ "classe": "Mago", "cartas": [{ "nome": "A" }, { "nome": "B" }] }),
        )
        .await;

        patch_ficha(&store, id, json!({ "nome": "X" })).await;
        let ficha = store.find_by_account(&id).await.unwrap().unwrap();
        assert_eq!(ficha.sheet.nome, "X");
        assert_eq!(ficha.sheet.classe, "Mago");
        assert_eq!(ficha.cartas.len(), 2);

        patch_ficha(&store, id, json!({ "cartas": [{ "nome": "C" }] })).await;
        let ficha = store.find_by_account(&id).await.unwrap().unwrap();
        assert_eq!(ficha.cartas.len(), 1);
        assert_eq!(ficha.cartas[0].nome, "C");
    }

    #[tokio::test]
    async fn test_stale_save_is_a_conflict() {
        let store = store();
        let id = register(&store, "alice@example.com").await;
        patch_ficha(&store, id, json!({ "cartasPontosDisponiveis": 2 })).await;

        let stale = store.find_by_account(&id).await.unwrap().unwrap();
        store.spend_point(&id, PointPool::Cards).await.unwrap();

        let result = store.save(&id, &stale).await;
        assert!(matches!(result, Err(AccountError::FichaConflict)));
        let ficha = store.find_by_account(&id).await.unwrap().unwrap();
        assert_eq!(ficha.pools.get(PointPool::Cards), 1);
    }

    #[tokio::test]
    async fn test_update_ficha_unknown_account() {
        let result = UpdateFichaUseCase::new(store())
            .execute(AccountId::new(), FichaPatch::default())
            .await;
        assert!(matches!(result, Err(AccountError::AccountNotFound)));
    }

    #[tokio::test]
    async fn test_replace_paths_with_empty_list_clears() {
        let store = store();
        let id = register(&store, "alice@example.com").await;
        let use_case = ReplacePathsUseCase::new(store.clone());

        let stored = use_case
            .execute(
                id,
                vec![Path {
                    nome: "Sombra".into(),
                    desbloqueado: true,
                    descricao: String::new(),
                }],
            )
            .await
            .unwrap();
        assert_eq!(stored.len(), 1);

        assert!(use_case.execute(id, Vec::new()).await.unwrap().is_empty());
        let ficha = store.find_by_account(&id).await.unwrap().unwrap();
        assert!(ficha.paths.is_empty());
    }

    #[tokio::test]
    async fn test_connections_are_stored_verbatim() {
        let store = store();
        let id = register(&store, "alice@example.com").await;
        let connections = vec![json!({ "from": 0, "to": 1, "cor": "azul" }), json!("livre")];

        let stored = SaveConnectionsUseCase::new(store.clone())
            .execute(id, connections.clone())
            .await
            .unwrap();
        assert_eq!(stored, connections);

        let ficha = FichaQueryUseCase::new(store.clone())
            .by_account(&id)
            .await
            .unwrap();
        assert_eq!(ficha.path_connections, connections);
    }
}

mod router_tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use http_body_util::BodyExt;
    use platform::token::TokenKeys;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::application::AccountConfig;
    use crate::infra::memory::InMemoryAccountStore;
    use crate::presentation::router::account_router;

    fn app() -> Router {
        account_router(
            InMemoryAccountStore::new(),
            AccountConfig::default(),
            Arc::new(TokenKeys::from_secret(b"router-tests").unwrap()),
        )
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn register_and_login(app: &Router) -> String {
        let (status, body) = send(
            app,
            Method::POST,
            "/register",
            None,
            Some(json!({ "username": "alice", "email": "alice@example.com", "password": "pw" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Usuário criado com sucesso!");

        let (status, body) = send(
            app,
            Method::POST,
            "/login",
            None,
            Some(json!({ "email": "alice@example.com", "password": "pw" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["username"], "alice");
        assert_eq!(body["user"]["email"], "alice@example.com");
        assert!(body["user"]["_id"].is_string());
        assert_eq!(body["ficha"]["cartasPontosDisponiveis"], 0);

        body["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_alice_scenario() {
        let app = app();
        let token = register_and_login(&app).await;

        let (status, body) = send(
            &app,
            Method::GET,
            "/ficha/cartas-pontos?email=alice@example.com",
            None,
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "pontosDisponiveis": 0 }));

        let (status, body) = send(
            &app,
            Method::PUT,
            "/ficha/gastar-ponto-carta",
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INSUFFICIENT_POINTS");
        assert_eq!(
            body["error"],
            "Você não possui pontos disponíveis para criar cartas."
        );
    }

    #[tokio::test]
    async fn test_duplicate_registration_is_bad_request() {
        let app = app();
        register_and_login(&app).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/register",
            None,
            Some(json!({ "username": "eve", "email": "alice@example.com", "password": "pw" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Email já cadastrado.", "code": "EMAIL_TAKEN" }));
    }

    #[tokio::test]
    async fn test_mutations_require_token() {
        let app = app();

        let (status, body) = send(&app, Method::PUT, "/ficha/gastar-ponto-path", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Usuário não autenticado.");

        let (status, body) = send(
            &app,
            Method::PUT,
            "/updateFicha",
            Some("not-a-jwt"),
            Some(json!({ "ficha": { "nome": "X" } })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Token inválido ou expirado.");
    }

    #[tokio::test]
    async fn test_update_then_spend_both_pools() {
        let app = app();
        let token = register_and_login(&app).await;

        let (status, body) = send(
            &app,
            Method::PUT,
            "/updateFicha",
            Some(&token),
            Some(json!({
                "email": "ignored@example.com",
                "ficha": { "nome": "Kael", "pontosCartas": 2, "pathPoints": 1 }
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Ficha atualizada!");
        assert_eq!(body["ficha"]["nome"], "Kael");
        assert_eq!(body["ficha"]["cartasPontosDisponiveis"], 2);

        let (status, body) = send(
            &app,
            Method::POST,
            "/ficha/gastar-ponto-carta",
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "pontosRestantes": 1 }));

        let (_, body) = send(
            &app,
            Method::PUT,
            "/ficha/gastar-ponto-path",
            Some(&token),
            None,
        )
        .await;
        assert_eq!(body, json!({ "pontosRestantes": 0 }));

        let (_, body) = send(
            &app,
            Method::GET,
            "/ficha/path-points?email=alice@example.com",
            None,
            None,
        )
        .await;
        assert_eq!(body, json!({ "pathPoints": 0 }));
    }

    #[tokio::test]
    async fn test_negative_pool_is_rejected() {
        let app = app();
        let token = register_and_login(&app).await;

        let (status, body) = send(
            &app,
            Method::PUT,
            "/updateFicha",
            Some(&token),
            Some(json!({ "ficha": { "cartazesPontosDisponiveis": -5 } })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_FICHA");
    }

    #[tokio::test]
    async fn test_paths_and_connections_roundtrip() {
        let app = app();
        let token = register_and_login(&app).await;

        let paths = json!([{ "nome": "Lâmina", "desbloqueado": false, "descricao": "Corte" }]);
        let (status, body) = send(
            &app,
            Method::PUT,
            "/ficha/update-paths",
            Some(&token),
            Some(json!({ "paths": paths })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Paths atualizados!", "paths": paths }));

        let (_, body) = send(
            &app,
            Method::GET,
            "/ficha/paths?email=alice@example.com",
            None,
            None,
        )
        .await;
        assert_eq!(body, json!({ "paths": paths }));

        let (status, body) = send(
            &app,
            Method::PUT,
            "/ficha/update-paths",
            Some(&token),
            Some(json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "MISSING_FIELDS");

        let connections = json!([{ "de": "Lâmina", "para": "Sombra" }]);
        let (status, body) = send(
            &app,
            Method::PUT,
            "/ficha/salvar-conexoes",
            Some(&token),
            Some(json!({ "pathConnections": connections })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Conexões salvas!");

        let (_, body) = send(&app, Method::GET, "/ficha/conexoes", Some(&token), None).await;
        assert_eq!(body, json!({ "pathConnections": connections }));
    }

    #[tokio::test]
    async fn test_lookup_of_unknown_email_is_not_found() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::GET,
            "/ficha/paths?email=nobody@example.com",
            None,
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Usuário não encontrado.");

        for uri in [
            "/ficha/cartas-pontos?email=not-an-email",
            "/ficha/path-points?email=",
            "/ficha/paths",
        ] {
            let (status, body) = send(&app, Method::GET, uri, None, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(body["code"], "ACCOUNT_NOT_FOUND");
        }
    }

    #[tokio::test]
    async fn test_update_ficha_accepts_numeric_strings() {
        let app = app();
        let token = register_and_login(&app).await;

        let (status, body) = send(
            &app,
            Method::PUT,
            "/updateFicha",
            Some(&token),
            Some(json!({
                "ficha": {
                    "vida": "10",
                    "ca": " 12 ",
                    "pontos": 3,
                    "atributos": { "força": "3", "agilidade": 2.0 },
                    "pathPoints": "2",
                    "cartazesPontosDisponiveis": ""
                }
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ficha"]["vida"], 10);
        assert_eq!(body["ficha"]["ca"], 12);
        assert_eq!(body["ficha"]["atributos"]["força"], 3);
        assert_eq!(body["ficha"]["atributos"]["agilidade"], 2);
        assert_eq!(body["ficha"]["pathPoints"], 2);
        assert_eq!(body["ficha"]["cartazesPontosDisponiveis"], 0);

        let (status, body) = send(
            &app,
            Method::PUT,
            "/updateFicha",
            Some(&token),
            Some(json!({ "ficha": { "vida": "muita" } })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_BODY");
    }

    #[tokio::test]
    async fn test_login_unknown_email_and_wrong_password() {
        let app = app();
        register_and_login(&app).await;

        let (status, _) = send(
            &app,
            Method::POST,
            "/login",
            None,
            Some(json!({ "email": "bob@example.com", "password": "pw" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(
            &app,
            Method::POST,
            "/login",
            None,
            Some(json!({ "email": "alice@example.com", "password": "bad" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Senha incorreta.");
    }
}

mod postgres_tests {
    use kernel::id::AccountId;
    use serde_json::json;
    use sqlx::PgPool;

    use crate::domain::entity::account::Account;
    use crate::domain::entity::ficha::{Ficha, Path, PointPools};
    use crate::domain::repository::{AccountRepository, FichaRepository};
    use crate::domain::value_object::{
        email::Email,
        point_pool::PointPool,
        user_name::UserName,
        user_password::{RawPassword, UserPassword},
    };
    use crate::error::AccountError;
    use crate::infra::postgres::PgAccountRepository;

    fn new_account(email: &str) -> Account {
        let raw = RawPassword::new("pw".to_string()).unwrap();
        Account::new(
            UserName::new("alice").unwrap(),
            Email::new(email).unwrap(),
            UserPassword::from_raw(&raw, None).unwrap(),
        )
    }

    async fn seed(repo: &PgAccountRepository, pools: PointPools) -> AccountId {
        let account = new_account("alice@example.com");
        let ficha = Ficha {
            pools,
            ..Ficha::new()
        };
        repo.create(&account, &ficha).await.unwrap();
        account.account_id
    }

    #[sqlx::test(migrations = "../../../database/migrations")]
    async fn test_create_persists_account_and_zero_ficha(pool: PgPool) {
        let repo = PgAccountRepository::new(pool);
        let id = seed(&repo, PointPools::default()).await;

        let email = Email::new("ALICE@example.com").unwrap();
        let account = repo.find_by_email(&email).await.unwrap().unwrap();
        assert_eq!(account.account_id, id);
        assert_eq!(account.username.as_str(), "alice");
        assert!(repo.find_by_id(&id).await.unwrap().is_some());

        let ficha = repo.find_by_account(&id).await.unwrap().unwrap();
        assert_eq!(ficha.pools, PointPools::default());
        assert_eq!(ficha.sheet, Ficha::new().sheet);
        assert!(ficha.paths.is_empty());
    }

    #[sqlx::test(migrations = "../../../database/migrations")]
    async fn test_unique_index_rejects_duplicate_email(pool: PgPool) {
        let repo = PgAccountRepository::new(pool.clone());
        seed(&repo, PointPools::default()).await;

        let result = repo
            .create(&new_account("alice@example.com"), &Ficha::new())
            .await;
        assert!(matches!(result, Err(AccountError::EmailTaken)));

        let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        let fichas: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM fichas")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!((users, fichas), (1, 1));
    }

    #[sqlx::test(migrations = "../../../database/migrations")]
    async fn test_concurrent_spends_on_last_point(pool: PgPool) {
        let repo = PgAccountRepository::new(pool);
        let id = seed(
            &repo,
            PointPools {
                cartas_pontos_disponiveis: 1,
                ..Default::default()
            },
        )
        .await;

        let first = tokio::spawn({
            let repo = repo.clone();
            async move { repo.spend_point(&id, PointPool::Cards).await }
        });
        let second = tokio::spawn({
            let repo = repo.clone();
            async move { repo.spend_point(&id, PointPool::Cards).await }
        });

        let results = [first.await.unwrap(), second.await.unwrap()];
        assert_eq!(results.iter().filter(|r| matches!(r, Ok(0))).count(), 1);
        assert_eq!(
            results
                .iter()
                .filter(|r| matches!(r, Err(AccountError::InsufficientPoints(PointPool::Cards))))
                .count(),
            1
        );

        let ficha = repo.find_by_account(&id).await.unwrap().unwrap();
        assert_eq!(ficha.pools.get(PointPool::Cards), 0);
    }

    #[sqlx::test(migrations = "../../../database/migrations")]
    async fn test_spend_failures_leave_pools_untouched(pool: PgPool) {
        let repo = PgAccountRepository::new(pool);
        let id = seed(
            &repo,
            PointPools {
                path_points: 2,
                ..Default::default()
            },
        )
        .await;

        assert!(matches!(
            repo.spend_point(&id, PointPool::Posters).await,
            Err(AccountError::InsufficientPoints(PointPool::Posters))
        ));
        assert!(matches!(
            repo.spend_point(&AccountId::new(), PointPool::Paths).await,
            Err(AccountError::AccountNotFound)
        ));
        assert_eq!(repo.spend_point(&id, PointPool::Paths).await.unwrap(), 1);

        let ficha = repo.find_by_account(&id).await.unwrap().unwrap();
        assert_eq!(ficha.pools.get(PointPool::Posters), 0);
        assert_eq!(ficha.pools.get(PointPool::Paths), 1);
    }

    #[sqlx::test(migrations = "../../../database/migrations")]
    async fn test_save_checks_version(pool: PgPool) {
        let repo = PgAccountRepository::new(pool);
        let id = seed(
            &repo,
            PointPools {
                cartas_pontos_disponiveis: 2,
                ..Default::default()
            },
        )
        .await;

        let stale = repo.find_by_account(&id).await.unwrap().unwrap();
        repo.spend_point(&id, PointPool::Cards).await.unwrap();

        let mut overwrite = stale.clone();
        overwrite.sheet.nome = "Kael".into();
        assert!(matches!(
            repo.save(&id, &overwrite).await,
            Err(AccountError::FichaConflict)
        ));

        let mut fresh = repo.find_by_account(&id).await.unwrap().unwrap();
        assert_eq!(fresh.pools.get(PointPool::Cards), 1);
        assert_eq!(fresh.sheet.nome, "");

        fresh.sheet.nome = "Kael".into();
        let saved = repo.save(&id, &fresh).await.unwrap();
        assert_eq!(saved.version, fresh.version + 1);
        assert_eq!(
            repo.find_by_account(&id).await.unwrap().unwrap().sheet.nome,
            "Kael"
        );

        assert!(matches!(
            repo.save(&AccountId::new(), &fresh).await,
            Err(AccountError::AccountNotFound)
        ));
    }

    #[sqlx::test(migrations = "../../../database/migrations")]
    async fn test_paths_and_connections_overwrite(pool: PgPool) {
        let repo = PgAccountRepository::new(pool);
        let id = seed(&repo, PointPools::default()).await;

        let paths = vec![Path {
            nome: "Sombra".into(),
            desbloqueado: true,
            descricao: "Furtividade".into(),
        }];
        assert_eq!(repo.replace_paths(&id, &paths).await.unwrap(), paths);
        assert!(repo.replace_paths(&id, &[]).await.unwrap().is_empty());

        let connections = vec![json!({ "de": 0, "para": 1 }), json!(null)];
        assert_eq!(
            repo.replace_connections(&id, &connections).await.unwrap(),
            connections
        );

        let ficha = repo.find_by_account(&id).await.unwrap().unwrap();
        assert!(ficha.paths.is_empty());
        assert_eq!(ficha.path_connections, connections);

        assert!(matches!(
            repo.replace_paths(&AccountId::new(), &paths).await,
            Err(AccountError::AccountNotFound)
        ));
    }
}
