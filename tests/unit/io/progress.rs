//! Tests for progress display management

#[cfg(test)]
mod tests {
    use gridstitch::io::progress::ProgressManager;
    use gridstitch::reconstruction::runner::{ProgressObserver, SilentProgress};

    fn notify(observer: &impl ProgressObserver, completed: usize, total: usize) {
        observer.tile_completed(completed, total);
    }

    // Tests completion counts flow through the observer into the bar
    // Verified by dropping the set_position call
    #[test]
    fn test_completion_updates_position() {
        let progress = ProgressManager::visible(10);

        notify(&progress, 3, 10);
        assert_eq!(progress.position(), 3);

        notify(&progress, 7, 10);
        assert_eq!(progress.position(), 7);

        progress.finish();
    }

    // Tests the hidden manager accepts updates without displaying
    #[test]
    fn test_hidden_manager_tracks_silently() {
        let progress = ProgressManager::hidden();

        notify(&progress, 1, 2);
        assert_eq!(progress.position(), 1);

        progress.finish();
    }

    // Tests out-of-order completion reports are tolerated
    //
    // Worker threads may report completions in any order; the bar simply
    // reflects the latest report.
    #[test]
    fn test_out_of_order_updates() {
        let progress = ProgressManager::hidden();

        notify(&progress, 5, 8);
        notify(&progress, 4, 8);
        assert_eq!(progress.position(), 4);
    }

    // Tests the silent observer discards notifications
    #[test]
    fn test_silent_observer_is_a_no_op() {
        notify(&SilentProgress, 1, 1);
        notify(&SilentProgress, 0, 0);
    }
}
