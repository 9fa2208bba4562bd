#[tokio::test]
#[ignore]
async fn live_list_jobs_smoke() {
    let Some(client) = crate::common::live_client() else {
        return;
    };

    let jobs = client.list_jobs(&[], None).await.unwrap();
    if let Some(job) = jobs.first() {
        let files = client.list_files(&job.id).await.unwrap();
        for file in files {
            assert!(!file.filename.is_empty());
        }
    }
}
