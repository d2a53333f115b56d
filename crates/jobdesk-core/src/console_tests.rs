    use super::*;
    use jobdesk_protocols::{FieldValue, ParamSpec};
    use serde_json::json;

    use crate::test_support::RecordingApi;

    fn backup_task() -> TaskDefinition {
        let mut parameters = Parameters::new();
        parameters.insert("hosts".to_string(), ParamSpec::new("hosts", "list"));
        parameters.insert("dest".to_string(), ParamSpec::new("dest", "string"));
        TaskDefinition {
            name: "backup".to_string(),
            description: "Back up hosts".to_string(),
            parameters,
        }
    }

    fn nightly() -> Job {
        Job {
            id: "nightly".to_string(),
            func: "backup".to_string(),
            trigger: "interval[0:00:30]".to_string(),
            args: vec![json!(["db1"])],
            kwargs: json!({"dest": "/srv"}).as_object().cloned().unwrap(),
            status: "running".to_string(),
            next_run_time: None,
        }
    }

    async fn loaded_console() -> Console<RecordingApi> {
        let api = RecordingApi::new()
            .with_tasks(vec![backup_task()])
            .with_jobs(vec![nightly()]);
        let mut console = Console::new(api);
        console.reload().await.unwrap();
        console
    }

    #[tokio::test]
    async fn test_reload_fetches_both_lists() {
        let console = loaded_console().await;
        assert_eq!(console.available_tasks().len(), 1);
        assert_eq!(console.jobs().len(), 1);
        assert!(console.job("nightly").is_some());
        assert_eq!(console.api().calls(), vec!["list_available_tasks", "list_jobs"]);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_list() {
        let mut console = loaded_console().await;
        console.api().set_failing(true);
        assert!(console.refresh_jobs().await.is_err());
        assert!(console.refresh_tasks().await.is_err());
        assert_eq!(console.jobs(), &[nightly()]);
        assert_eq!(console.available_tasks(), &[backup_task()]);
    }

    #[tokio::test]
    async fn test_task_parameters_unknown_task() {
        let console = loaded_console().await;
        assert_eq!(console.task_parameters("backup").len(), 2);
        assert!(console.task_parameters("missing").is_empty());
    }

    #[tokio::test]
    async fn test_actions_refresh_jobs() {
        let mut console = loaded_console().await;
        console.pause_job("nightly").await.unwrap();
        console.resume_job("nightly").await.unwrap();
        console.run_job_now("nightly").await.unwrap();
        console.remove_job("nightly").await.unwrap();

        let calls = console.api().calls();
        assert_eq!(
            &calls[2..],
            &[
                "pause_job nightly",
                "list_jobs",
                "resume_job nightly",
                "list_jobs",
                "run_job_now nightly",
                "list_jobs",
                "remove_job nightly",
                "list_jobs",
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_action_skips_refresh() {
        let mut console = loaded_console().await;
        console.api().set_failing(true);
        assert!(console.pause_job("nightly").await.is_err());
        assert_eq!(console.api().calls().last().unwrap(), "pause_job nightly");
    }

    #[tokio::test]
    async fn test_edit_unknown_job() {
        let mut console = loaded_console().await;
        assert!(matches!(
            console.edit_job("ghost"),
            Err(DraftError::JobNotFound(id)) if id == "ghost"
        ));
        assert!(console.draft().is_idle());
    }

    #[tokio::test]
    async fn test_edit_and_submit_updates_job() {
        let mut console = loaded_console().await;
        let draft = console.edit_job("nightly").unwrap();
        assert_eq!(draft.kwargs["hosts"], json!(["db1"]));
        assert!(draft.set_trigger_field("minutes", Some(FieldValue::from(5))));

        console.submit_draft().await.unwrap();
        assert!(console.draft().is_idle());

        let payload = &console.api().payloads()[0];
        assert_eq!(payload.job_id, "nightly");
        assert_eq!(payload.args, vec![json!(["db1"])]);
        assert_eq!(payload.trigger_args["minutes"], json!(5));
        assert_eq!(payload.trigger_args["seconds"], json!(30));
        assert_eq!(console.api().calls().last().unwrap(), "list_jobs");
    }

    #[tokio::test]
    async fn test_new_job_submit_creates() {
        let mut console = loaded_console().await;
        let draft = console.new_job().unwrap();
        draft.func = "backup".to_string();
        draft.job_id = "weekly".to_string();
        draft.kwargs.insert("hosts".to_string(), json!(["db2"]));
        console.draft_mut().change_trigger_kind("cron").unwrap();

        console.submit_draft().await.unwrap();
        let payload = &console.api().payloads()[0];
        assert_eq!(payload.trigger, "cron");
        assert_eq!(payload.args, vec![json!(["db2"])]);
        assert!(payload.kwargs.is_empty());
    }

    #[tokio::test]
    async fn test_submit_without_draft() {
        let mut console = loaded_console().await;
        assert!(matches!(console.submit_draft().await, Err(DraftError::NoDraft)));
    }

    #[tokio::test]
    async fn test_cancel_draft() {
        let mut console = loaded_console().await;
        console.new_job().unwrap();
        console.cancel_draft();
        assert!(console.draft().is_idle());
        assert!(console.new_job().is_ok());
    }

    #[tokio::test]
    async fn test_list_logs_passthrough() {
        let console = loaded_console().await;
        let page = console.list_logs(&LogQuery::default()).await.unwrap();
        assert_eq!(page.count, 0);
        assert_eq!(console.api().calls().last().unwrap(), "list_logs page=1");
    }
