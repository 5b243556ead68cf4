use crate::{
    modules::restaurant,
    types::{Context, JobFn, SchedulableJob},
};
use chrono::Utc;
use std::str::FromStr;
use std::sync::Arc;

const SWEEP_SCHEDULE: &str = "0 0 * * * *";

async fn sweep_expired_promotions_job(ctx: Arc<Context>) -> Result<(), apalis::prelude::Error> {
    tracing::info!("Clearing expired restaurant promotions");

    match restaurant::repository::clear_expired_promotions(&ctx.db_conn.pool, Utc::now()).await {
        Ok(cleared) => tracing::info!("Cleared {} expired promotion(s)", cleared),
        Err(_) => tracing::error!("Failed to clear expired promotions, retrying on the next tick"),
    }

    Ok(())
}

fn setup_sweep_expired_promotions_job(ctx: Arc<Context>) -> JobFn {
    Arc::new(move || {
        let ctx = ctx.clone();
        Box::pin(async move { sweep_expired_promotions_job(ctx).await })
    })
}

pub fn list(ctx: Arc<Context>) -> Vec<SchedulableJob> {
    vec![SchedulableJob {
        name: "eats::payment::sweep_expired_promotions",
        schedule: apalis::cron::Schedule::from_str(SWEEP_SCHEDULE)
            .expect("Couldn't create schedule!"),
        job: setup_sweep_expired_promotions_job(ctx),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn sweep_runs_at_the_top_of_every_hour() {
        let schedule = apalis::cron::Schedule::from_str(SWEEP_SCHEDULE).unwrap();
        let after = Utc.with_ymd_and_hms(2024, 8, 1, 12, 30, 15).unwrap();

        let upcoming = schedule.after(&after).take(3).collect::<Vec<_>>();

        assert_eq!(upcoming[0], Utc.with_ymd_and_hms(2024, 8, 1, 13, 0, 0).unwrap());
        assert!(upcoming
            .iter()
            .all(|tick| tick.minute() == 0 && tick.second() == 0));
    }

    #[tokio::test]
    async fn lists_the_sweep() {
        let jobs = list(Arc::new(Context::for_tests()));

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].name, "eats::payment::sweep_expired_promotions");
    }
}
