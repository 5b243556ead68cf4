use crate::{modules, types};
use apalis::cron::CronStream;
use apalis::prelude::*;
use apalis::utils::TokioExecutor;
use std::sync::Arc;

pub fn monitor(ctx: Arc<types::Context>) -> Monitor<TokioExecutor> {
    let mut monitor = Monitor::<TokioExecutor>::new();

    for job in modules::payment::job::list(ctx) {
        let run = job.job.clone();
        let worker = WorkerBuilder::new(job.name)
            .stream(CronStream::new(job.schedule).into_stream())
            .build_fn(move |_tick: types::CronTick| {
                let run = run.clone();
                async move { run().await }
            });

        tracing::debug!("Scheduled job {}", job.name);
        monitor = monitor.register_with_count(1, worker);
    }

    monitor
}
