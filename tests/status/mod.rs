mod report_workspace_changes;
